use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use gridroute_core::Coord;

/// The search strategies a host can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl AlgorithmKind {
    /// Every strategy, in menu order.
    pub const ALL: [AlgorithmKind; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Short lowercase identifier, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }

    /// Informational complexity label. Says nothing about path optimality.
    pub fn complexity(self) -> &'static str {
        match self {
            Self::Bfs => "BFS ≈ O(V + E)",
            Self::Dfs => "DFS ≈ O(V + E)",
            Self::Dijkstra => "Dijkstra ≈ O(E log V)",
            Self::AStar => "A* ≈ O(E log V) with heuristic",
        }
    }

    /// Whether the returned path is guaranteed to be optimal: by edge count
    /// for BFS, by total cost for Dijkstra and A*. DFS makes no such claim.
    pub fn guarantees_shortest(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Whether the strategy accounts for weighted cells.
    pub fn is_weighted(self) -> bool {
        matches!(self, Self::Dijkstra | Self::AStar)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        })
    }
}

/// An algorithm name that matches none of the known strategies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d}, expected one of: bfs, dfs, dijkstra, astar")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for AlgorithmKind {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Outcome of one completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub algorithm: AlgorithmKind,
    /// Distinct cells visited, start and end excluded.
    pub visited: usize,
    /// Route from start to end inclusive; empty when the end is unreachable.
    pub path: Vec<Coord>,
    /// Sum of arrival costs along `path`; 0 when it is empty.
    pub path_cost: i32,
    pub elapsed: Duration,
}

impl RunReport {
    /// Path length in edges: `path.len() - 1`, or 0 for an empty path.
    pub fn path_len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether the end was reached.
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn complexity(&self) -> &'static str {
        self.algorithm.complexity()
    }

    pub fn guarantees_shortest(&self) -> bool {
        self.algorithm.guarantees_shortest()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: visited {}, path {}",
            self.algorithm, self.visited, self.path_len()
        )?;
        if self.is_reachable() {
            write!(f, " (cost {})", self.path_cost)?;
        } else {
            f.write_str(" (unreachable)")?;
        }
        if !self.guarantees_shortest() {
            f.write_str(" [not guaranteed shortest]")?;
        }
        write!(
            f,
            ", {} ms, {}",
            self.elapsed.as_millis(),
            self.complexity()
        )
    }
}
