//! Random maze generation for gridroute grids.
//!
//! Mazes here are independent density samples, not carved labyrinths: each
//! cell becomes a wall, a weight or stays open on its own coin flips, so the
//! end is not guaranteed to be reachable.

pub mod mapgen;

pub use mapgen::{MazeConfig, MazeGen, MazeStats};
