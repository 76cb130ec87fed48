use crate::geom::Coord;

/// Invalid grid configuration.
///
/// Raised when constructing or mutating a [`Grid`](crate::Grid) would break
/// one of its invariants. A failed mutation leaves the grid unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Rows and columns must both be positive.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },
    /// The cell lies outside `[0, rows) x [0, cols)`.
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Coord),
    /// Start and end would occupy the same cell.
    #[error("start and end must be distinct cells, both at {0}")]
    StartEqualsEnd(Coord),
    /// The start or end cannot be placed on an obstructed cell.
    #[error("cell {0} is obstructed")]
    Obstructed(Coord),
    /// Walls and weights cannot be placed on the start or end cell.
    #[error("cell {0} holds the start or end marker")]
    Endpoint(Coord),
}
