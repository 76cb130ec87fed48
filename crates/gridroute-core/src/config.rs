//! Declarative grid configuration.
//!
//! [`GridConfig`] is the plain-data form of a [`Grid`]: dimensions,
//! endpoints and marker lists. It is what hosts load from files and what
//! `Grid` serializes through when the `serde` feature is enabled.

use crate::error::GridError;
use crate::geom::Coord;
use crate::grid::Grid;

/// Smallest and largest row counts accepted by [`GridConfig::sized`].
pub const ROWS_BOUNDS: (i32, i32) = (5, 60);

/// Smallest and largest column counts accepted by [`GridConfig::sized`].
pub const COLS_BOUNDS: (i32, i32) = (10, 80);

/// Plain-data description of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Coord,
    pub end: Coord,
    /// Obstructed cells.
    pub walls: Vec<Coord>,
    /// Costly cells. Applied after `walls`, so a cell listed in both ends up
    /// costly.
    pub weights: Vec<Coord>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 40,
            start: Coord::new(2, 2),
            end: Coord::new(17, 35),
            walls: Vec::new(),
            weights: Vec::new(),
        }
    }
}

impl GridConfig {
    /// An empty configuration of roughly `rows x cols`.
    ///
    /// Rows are clamped to [`ROWS_BOUNDS`] and columns to [`COLS_BOUNDS`];
    /// the start sits near the top-left corner and the end near the
    /// bottom-right one.
    pub fn sized(rows: i32, cols: i32) -> Self {
        let rows = rows.clamp(ROWS_BOUNDS.0, ROWS_BOUNDS.1);
        let cols = cols.clamp(COLS_BOUNDS.0, COLS_BOUNDS.1);
        Self {
            rows,
            cols,
            start: Coord::new(2.min(rows - 1), 2.min(cols - 1)),
            end: Coord::new(rows - 3, cols - 3),
            walls: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Validate the configuration and build the grid it describes.
    pub fn build(&self) -> Result<Grid, GridError> {
        let mut grid = Grid::new(self.rows, self.cols, self.start, self.end)?;
        for &c in &self.walls {
            grid.mark_obstructed(c)?;
        }
        for &c in &self.weights {
            grid.mark_costly(c)?;
        }
        Ok(grid)
    }
}

impl From<&Grid> for GridConfig {
    fn from(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            start: grid.start(),
            end: grid.end(),
            walls: grid.obstructed(),
            weights: grid.costly(),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: GridConfig = serde_json::from_str(r#"{"walls":[{"row":5,"col":5}]}"#).unwrap();
        assert_eq!(cfg.rows, 20);
        assert_eq!(cfg.walls, vec![Coord::new(5, 5)]);
    }
}
