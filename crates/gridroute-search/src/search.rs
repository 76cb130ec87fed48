//! Step-wise search execution.
//!
//! A [`Search`] is a lazy, finite, non-restartable sequence of
//! [`SearchEvent`]s. Every event is produced only after the cell it names has
//! been fully expanded, so a host may pause between pulls (to animate) or
//! drop the search (to cancel) without affecting the result of the steps
//! already taken. The grid is only ever borrowed immutably.

use std::iter::FusedIterator;

use gridroute_core::{Coord, Grid};

use crate::astar::Astar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::path::{Predecessors, path_cost};
use crate::report::AlgorithmKind;
use crate::traits::AstarPather;

/// One observable step of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// A cell other than the start or end was visited. `order` counts visits
    /// from 1.
    Visit { cell: Coord, order: usize },
    /// The end was reached. `path` runs from start to end inclusive and
    /// `cost` is its total arrival cost.
    Path { path: Vec<Coord>, cost: i32 },
    /// The frontier emptied without reaching the end.
    Unreachable,
}

/// The algorithm-specific frontier driving a [`Search`].
#[derive(Debug)]
enum Frontier {
    Bfs(Bfs),
    Dfs(Dfs),
    Dijkstra(Dijkstra),
    Astar(Astar),
}

impl Frontier {
    fn new<P: AstarPather>(kind: AlgorithmKind, pather: &P, start: Coord, end: Coord) -> Self {
        match kind {
            AlgorithmKind::Bfs => Self::Bfs(Bfs::new(start)),
            AlgorithmKind::Dfs => Self::Dfs(Dfs::new(start)),
            AlgorithmKind::Dijkstra => Self::Dijkstra(Dijkstra::new(start)),
            AlgorithmKind::AStar => Self::Astar(Astar::new(pather, start, end)),
        }
    }

    fn pop(&mut self) -> Option<Coord> {
        match self {
            Self::Bfs(f) => f.pop(),
            Self::Dfs(f) => f.pop(),
            Self::Dijkstra(f) => f.pop(),
            Self::Astar(f) => f.pop(),
        }
    }

    fn expand<P: AstarPather>(
        &mut self,
        pather: &P,
        cell: Coord,
        nbuf: &mut Vec<Coord>,
        preds: &mut Predecessors,
    ) {
        match self {
            Self::Bfs(f) => f.expand(pather, cell, nbuf, preds),
            Self::Dfs(f) => f.expand(pather, cell, nbuf, preds),
            Self::Dijkstra(f) => f.expand(pather, cell, nbuf, preds),
            Self::Astar(f) => f.expand(pather, cell, nbuf, preds),
        }
    }
}

/// An in-progress search from `start` to `end`.
///
/// Iterate it to drive the search. The last event is always
/// [`SearchEvent::Path`] or [`SearchEvent::Unreachable`]; afterwards the
/// iterator yields `None`.
#[derive(Debug)]
pub struct Search<'g, P> {
    pather: &'g P,
    kind: AlgorithmKind,
    start: Coord,
    end: Coord,
    frontier: Frontier,
    preds: Predecessors,
    nbuf: Vec<Coord>,
    visited: usize,
    finished: bool,
}

impl<'g> Search<'g, Grid> {
    /// Search `grid` from its start to its end.
    pub fn on_grid(grid: &'g Grid, kind: AlgorithmKind) -> Self {
        Self::new(grid, grid.start(), grid.end(), kind)
    }
}

impl<'g, P: AstarPather> Search<'g, P> {
    /// Prepare a search. No cell is visited until the first pull.
    pub fn new(pather: &'g P, start: Coord, end: Coord, kind: AlgorithmKind) -> Self {
        log::debug!("{kind} search from {start} to {end}");
        Self {
            pather,
            kind,
            start,
            end,
            frontier: Frontier::new(kind, pather, start, end),
            preds: Predecessors::new(),
            nbuf: Vec::with_capacity(4),
            visited: 0,
            finished: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Cells visited so far, start and end excluded. Never decreases.
    #[inline]
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Whether the terminal event has been produced.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<P: AstarPather> Iterator for Search<'_, P> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        if self.finished {
            return None;
        }
        loop {
            let Some(cell) = self.frontier.pop() else {
                self.finished = true;
                log::debug!("{} exhausted after {} visits", self.kind, self.visited);
                return Some(SearchEvent::Unreachable);
            };

            if cell == self.end {
                self.finished = true;
                let path = self.preds.reconstruct(self.start, self.end);
                let cost = path_cost(self.pather, &path);
                log::debug!(
                    "{} reached {} after {} visits, {} steps, cost {}",
                    self.kind,
                    self.end,
                    self.visited,
                    path.len().saturating_sub(1),
                    cost
                );
                return Some(SearchEvent::Path { path, cost });
            }

            self.frontier
                .expand(self.pather, cell, &mut self.nbuf, &mut self.preds);

            if cell != self.start {
                self.visited += 1;
                log::trace!("{} visit #{} {}", self.kind, self.visited, cell);
                return Some(SearchEvent::Visit {
                    cell,
                    order: self.visited,
                });
            }
        }
    }
}

impl<P: AstarPather> FusedIterator for Search<'_, P> {}
