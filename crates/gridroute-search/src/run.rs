use std::time::Instant;

use gridroute_core::{Coord, Grid};

use crate::report::{AlgorithmKind, RunReport};
use crate::search::{Search, SearchEvent};
use crate::traits::AstarPather;

/// Search `grid` from its start to its end and report the outcome.
///
/// The grid is only read. An unreachable end is not an error: the report
/// carries an empty path and the number of cells explored.
pub fn run(grid: &Grid, kind: AlgorithmKind) -> RunReport {
    run_with(grid, grid.start(), grid.end(), kind)
}

/// Like [`run`], over any pather and explicit endpoints.
///
/// Drains the same [`Search`] a host would step through, so the report is
/// identical to the one a paced consumer would assemble.
pub fn run_with<P: AstarPather>(
    pather: &P,
    start: Coord,
    end: Coord,
    kind: AlgorithmKind,
) -> RunReport {
    let started = Instant::now();
    let mut search = Search::new(pather, start, end, kind);
    let mut path = Vec::new();
    let mut path_cost = 0;
    for event in search.by_ref() {
        if let SearchEvent::Path { path: p, cost } = event {
            path = p;
            path_cost = cost;
        }
    }
    RunReport {
        algorithm: kind,
        visited: search.visited(),
        path,
        path_cost,
        elapsed: started.elapsed(),
    }
}
