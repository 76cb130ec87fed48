//! Terminal front end for gridroute.
//!
//! Demonstrates: grid configuration (flags or a JSON file), random mazes,
//! the four route searches, step-wise event streaming with pacing, and an
//! ASCII rendering of the visited cells and the final route.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use clap::Parser;
use gridroute_core::{Coord, Grid, GridConfig};
use gridroute_maze::{MazeConfig, MazeGen};
use gridroute_search::{AlgorithmKind, ParseAlgorithmError, RunReport, Search, SearchEvent};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const CH_EMPTY: char = '.';
const CH_WALL: char = '#';
const CH_WEIGHT: char = '~';
const CH_VISITED: char = 'o';
const CH_PATH: char = '*';
const CH_START: char = 'S';
const CH_END: char = 'E';

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Which searches to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    One(AlgorithmKind),
    All,
}

impl Selection {
    pub fn kinds(self) -> Vec<AlgorithmKind> {
        match self {
            Self::One(kind) => vec![kind],
            Self::All => AlgorithmKind::ALL.to_vec(),
        }
    }
}

impl FromStr for Selection {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::One)
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(kind) => f.write_str(kind.name()),
            Self::All => f.write_str("all"),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "gridroute")]
#[command(about = "Find a route across a grid with BFS, DFS, Dijkstra or A*", long_about = None)]
pub struct Cli {
    /// Grid rows (clamped to 5..=60)
    #[arg(long, default_value_t = 20)]
    pub rows: i32,

    /// Grid columns (clamped to 10..=80)
    #[arg(long, default_value_t = 40)]
    pub cols: i32,

    /// bfs, dfs, dijkstra, astar or all
    #[arg(short, long, default_value = "astar")]
    pub algorithm: Selection,

    /// Load the grid from a JSON grid configuration instead of --rows/--cols
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scatter random walls and weights over the grid
    #[arg(long)]
    pub maze: bool,

    /// Seed for --maze; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that a cell becomes a wall
    #[arg(long, default_value_t = 0.28)]
    pub wall_density: f64,

    /// Probability that a non-wall cell becomes a weight
    #[arg(long, default_value_t = 0.10)]
    pub weight_density: f64,

    /// Print every search event as it happens
    #[arg(long)]
    pub steps: bool,

    /// Pause between streamed events, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Print reports as JSON instead of drawing the grid
    #[arg(long)]
    pub json: bool,
}

// ---------------------------------------------------------------------------
// Grid setup
// ---------------------------------------------------------------------------

/// Build the grid described by the command line.
pub fn build_grid(cli: &Cli) -> Result<Grid, Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            serde_json::from_str::<GridConfig>(&text)?
        }
        None => GridConfig::sized(cli.rows, cli.cols),
    };
    let mut grid = config.build()?;

    if cli.maze {
        let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("maze seed {seed}");
        let maze = MazeConfig {
            wall_density: cli.wall_density,
            weight_density: cli.weight_density,
        };
        MazeGen::new(StdRng::seed_from_u64(seed), maze).generate(&mut grid);
    }
    Ok(grid)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw the grid as text, one row per line.
pub fn render(grid: &Grid, visited: &HashSet<Coord>, path: &[Coord]) -> String {
    let on_path: HashSet<Coord> = path.iter().copied().collect();
    let mut s = String::with_capacity(grid.len() + grid.rows() as usize);
    for c in grid.cells() {
        let ch = if c == grid.start() {
            CH_START
        } else if c == grid.end() {
            CH_END
        } else if grid.is_obstructed(c) {
            CH_WALL
        } else if on_path.contains(&c) {
            CH_PATH
        } else if visited.contains(&c) {
            CH_VISITED
        } else if grid.is_costly(c) {
            CH_WEIGHT
        } else {
            CH_EMPTY
        };
        s.push(ch);
        if c.col == grid.cols() - 1 {
            s.push('\n');
        }
    }
    s
}

/// Summary lines shown under the rendered grid.
pub fn summary(report: &RunReport) -> String {
    let mut s = format!(
        "{}\n  nodes visited: {}\n  path length:   {}\n",
        report.algorithm,
        report.visited,
        report.path_len()
    );
    if report.is_reachable() {
        s += &format!("  path cost:     {}\n", report.path_cost);
    } else {
        s += "  path:          unreachable\n";
    }
    if !report.guarantees_shortest() {
        s += "  note:          not guaranteed shortest\n";
    }
    s += &format!(
        "  time:          {} ms\n  complexity:    {}\n",
        report.elapsed.as_millis(),
        report.complexity()
    );
    s
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Run the selected searches, pulling events one at a time and writing
/// progress and results to `out`.
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let grid = build_grid(cli)?;
    let delay = Duration::from_millis(cli.delay_ms);

    for kind in cli.algorithm.kinds() {
        let started = std::time::Instant::now();
        let mut search = Search::on_grid(&grid, kind);
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        let mut path_cost = 0;

        for event in search.by_ref() {
            if cli.steps {
                writeln!(out, "{}", describe(&event))?;
            }
            match event {
                SearchEvent::Visit { cell, .. } => {
                    visited.insert(cell);
                }
                SearchEvent::Path { path: p, cost } => {
                    path = p;
                    path_cost = cost;
                }
                SearchEvent::Unreachable => {}
            }
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        let report = RunReport {
            algorithm: kind,
            visited: search.visited(),
            path,
            path_cost,
            elapsed: started.elapsed(),
        };
        log::info!("{report}");

        if cli.json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            write!(out, "{}", render(&grid, &visited, &report.path))?;
            writeln!(out, "{}", summary(&report))?;
        }
    }
    Ok(())
}

fn describe(event: &SearchEvent) -> String {
    match event {
        SearchEvent::Visit { cell, order } => format!("visit #{order} {cell}"),
        SearchEvent::Path { path, cost } => format!(
            "path of {} steps, cost {}",
            path.len().saturating_sub(1),
            cost
        ),
        SearchEvent::Unreachable => "unreachable".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["gridroute"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn selection_parsing() {
        assert_eq!("all".parse::<Selection>(), Ok(Selection::All));
        assert_eq!(
            "bfs".parse::<Selection>(),
            Ok(Selection::One(AlgorithmKind::Bfs))
        );
        assert!("nope".parse::<Selection>().is_err());
        assert_eq!(Selection::All.kinds().len(), 4);
    }

    #[test]
    fn cli_defaults() {
        let c = cli(&[]);
        assert_eq!((c.rows, c.cols), (20, 40));
        assert_eq!(c.algorithm, Selection::One(AlgorithmKind::AStar));
        assert!(!c.maze);
        assert!(Cli::try_parse_from(["gridroute", "-a", "greedy"]).is_err());
    }

    #[test]
    fn render_marks_cells() {
        let mut g = Grid::new(2, 4, Coord::new(0, 0), Coord::new(0, 3)).unwrap();
        g.mark_obstructed(Coord::new(1, 0)).unwrap();
        g.mark_costly(Coord::new(1, 3)).unwrap();
        let visited = HashSet::from([Coord::new(0, 1), Coord::new(1, 1)]);
        let path = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)];
        assert_eq!(render(&g, &visited, &path), "S**E\n#o.~\n");
    }

    #[test]
    fn seeded_maze_is_reproducible() {
        let c = cli(&["--maze", "--seed", "11", "--rows", "12", "--cols", "16"]);
        let a = build_grid(&c).unwrap();
        let b = build_grid(&c).unwrap();
        assert_eq!(a, b);
        assert_eq!((a.rows(), a.cols()), (12, 16));
    }

    #[test]
    fn execute_all_draws_every_algorithm() {
        let c = cli(&["--algorithm", "all", "--rows", "6", "--cols", "10"]);
        let mut out = Vec::new();
        execute(&c, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for label in ["BFS", "DFS", "Dijkstra", "A*"] {
            assert!(text.contains(label), "{label} missing:\n{text}");
        }
        assert!(text.contains("not guaranteed shortest"));
    }

    #[test]
    fn execute_streams_steps_and_json() {
        let c = cli(&["-a", "bfs", "--rows", "5", "--cols", "10", "--steps", "--json"]);
        let mut out = Vec::new();
        execute(&c, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("visit #1 "), "{text}");
        assert!(text.contains("path of 5 steps, cost 5"), "{text}");
        let last = text.lines().last().unwrap();
        let report: RunReport = serde_json::from_str(last).unwrap();
        assert_eq!(report.path_len(), 5);
    }

    #[test]
    fn config_file_is_loaded() {
        let dir = std::env::temp_dir().join(format!("gridroute-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("grid.json");
        std::fs::write(
            &path,
            r#"{"rows":3,"cols":3,"start":{"row":0,"col":0},"end":{"row":2,"col":2},
                "walls":[{"row":1,"col":1}],"weights":[]}"#,
        )
        .unwrap();
        let c = cli(&["--config", path.to_str().unwrap()]);
        let g = build_grid(&c).unwrap();
        assert!(g.is_obstructed(Coord::new(1, 1)));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
