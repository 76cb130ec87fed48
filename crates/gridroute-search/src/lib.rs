//! Route searches over a [`Grid`](gridroute_core::Grid).
//!
//! This crate implements four interchangeable strategies between a grid's
//! start and end cells:
//!
//! - **BFS** unweighted shortest path by edge count
//! - **DFS** depth-first reachability (no shortest-path guarantee)
//! - **Dijkstra** lowest total cost over weighted cells
//! - **A\*** lowest total cost, guided by the Manhattan distance
//!
//! [`run`] executes a search to completion and returns a [`RunReport`].
//! Hosts that want to animate progress pull [`SearchEvent`]s from a
//! [`Search`] instead; both paths produce identical results.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration (BFS, DFS) |
//! | [`WeightedPather`] : [`Pather`] | arrival costs (Dijkstra) |
//! | [`AstarPather`] : [`WeightedPather`] | admissible estimate (A*) |

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod heap;
mod path;
mod report;
mod run;
mod search;
mod traits;

pub use distance::manhattan;
pub use heap::PriorityQueue;
pub use path::{Predecessors, path_cost};
pub use report::{AlgorithmKind, ParseAlgorithmError, RunReport};
pub use run::{run, run_with};
pub use search::{Search, SearchEvent};
pub use traits::{AstarPather, Pather, WeightedPather};
