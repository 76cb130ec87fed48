//! **gridroute-core** — grid and cost model shared by the gridroute crates.
//!
//! This crate provides the coordinate type, the obstruction/cost [`Grid`]
//! that searches read from, its serializable [`GridConfig`] form, and the
//! [`GridError`] raised when a configuration would break the grid's
//! invariants.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Coord, CoordIter};
pub use grid::{BASE_COST, COSTLY_COST, Grid};
