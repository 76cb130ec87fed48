//! The obstruction and cost model searched by gridroute.
//!
//! A [`Grid`] is a `rows x cols` rectangle with a set of obstructed cells
//! (walls), a disjoint set of costly cells (weights), and distinct start and
//! end cells. Every mutation validates the invariants and returns a
//! [`GridError`] without touching the grid when they would break.

use std::collections::HashSet;

use crate::error::GridError;
use crate::geom::{Coord, CoordIter};

/// Cost of stepping onto an ordinary cell.
pub const BASE_COST: i32 = 1;

/// Cost of stepping onto a costly (weighted) cell.
pub const COSTLY_COST: i32 = 5;

/// A rectangular grid with walls, weighted cells and two endpoints.
///
/// Invariants:
/// - `start != end`, both inside the grid and never obstructed;
/// - a cell is never both obstructed and costly;
/// - walls and weights are never placed on the start or end cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    obstructed: HashSet<Coord>,
    costly: HashSet<Coord>,
    start: Coord,
    end: Coord,
}

impl Grid {
    /// Create an empty grid (no walls, no weights) with the given endpoints.
    pub fn new(rows: i32, cols: i32, start: Coord, end: Coord) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let grid = Self {
            rows,
            cols,
            obstructed: HashSet::new(),
            costly: HashSet::new(),
            start,
            end,
        };
        grid.check_in_bounds(start)?;
        grid.check_in_bounds(end)?;
        if start == end {
            return Err(GridError::StartEqualsEnd(start));
        }
        Ok(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Always `false`: dimensions are positive by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Whether `c` lies within `[0, rows) x [0, cols)`.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    #[inline]
    pub fn is_obstructed(&self, c: Coord) -> bool {
        self.obstructed.contains(&c)
    }

    #[inline]
    pub fn is_costly(&self, c: Coord) -> bool {
        self.costly.contains(&c)
    }

    /// Whether `c` is the start or the end cell.
    #[inline]
    pub fn is_endpoint(&self, c: Coord) -> bool {
        c == self.start || c == self.end
    }

    /// Obstructed cells, sorted row-major.
    pub fn obstructed(&self) -> Vec<Coord> {
        let mut v: Vec<Coord> = self.obstructed.iter().copied().collect();
        v.sort_unstable();
        v
    }

    /// Costly cells, sorted row-major.
    pub fn costly(&self) -> Vec<Coord> {
        let mut v: Vec<Coord> = self.costly.iter().copied().collect();
        v.sort_unstable();
        v
    }

    /// Row-major iterator over every cell of the grid.
    pub fn cells(&self) -> CoordIter {
        CoordIter::new(self.rows, self.cols)
    }

    /// Append the passable orthogonal neighbours of `c` into `buf`, in the
    /// order south, north, east, west. The caller clears `buf`.
    pub fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for n in c.neighbors_4() {
            if self.contains(n) && !self.obstructed.contains(&n) {
                buf.push(n);
            }
        }
    }

    /// Cost charged on arrival at `c`: [`COSTLY_COST`] for weighted cells,
    /// [`BASE_COST`] otherwise.
    #[inline]
    pub fn cost_of(&self, c: Coord) -> i32 {
        if self.costly.contains(&c) {
            COSTLY_COST
        } else {
            BASE_COST
        }
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Place a wall on `c`, clearing any weight there.
    pub fn mark_obstructed(&mut self, c: Coord) -> Result<(), GridError> {
        self.check_marker_target(c)?;
        self.costly.remove(&c);
        self.obstructed.insert(c);
        Ok(())
    }

    /// Place a weight on `c`, clearing any wall there.
    pub fn mark_costly(&mut self, c: Coord) -> Result<(), GridError> {
        self.check_marker_target(c)?;
        self.obstructed.remove(&c);
        self.costly.insert(c);
        Ok(())
    }

    /// Remove only the weight on `c`, leaving walls alone.
    pub fn unmark_costly(&mut self, c: Coord) -> Result<(), GridError> {
        self.check_in_bounds(c)?;
        self.costly.remove(&c);
        Ok(())
    }

    /// Erase both markers from `c`.
    pub fn clear(&mut self, c: Coord) -> Result<(), GridError> {
        self.check_in_bounds(c)?;
        self.obstructed.remove(&c);
        self.costly.remove(&c);
        Ok(())
    }

    /// Move the start marker to `c`.
    pub fn set_start(&mut self, c: Coord) -> Result<(), GridError> {
        self.check_endpoint_target(c, self.end)?;
        self.start = c;
        Ok(())
    }

    /// Move the end marker to `c`.
    pub fn set_end(&mut self, c: Coord) -> Result<(), GridError> {
        self.check_endpoint_target(c, self.start)?;
        self.end = c;
        Ok(())
    }

    /// Remove every wall and weight.
    pub fn reset(&mut self) {
        self.obstructed.clear();
        self.costly.clear();
    }

    /// Change the dimensions, dropping every marker.
    ///
    /// The start moves to `(min(2, rows-1), min(2, cols-1))` and the end to
    /// `(rows-3, cols-3)`. Fails when those positions are invalid for the new
    /// size, e.g. when the end would fall outside or onto the start.
    pub fn resize(&mut self, rows: i32, cols: i32) -> Result<(), GridError> {
        let start = Coord::new(2.min(rows - 1), 2.min(cols - 1));
        let end = Coord::new(rows - 3, cols - 3);
        *self = Self::new(rows, cols, start, end)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Validation helpers
    // -----------------------------------------------------------------------

    fn check_in_bounds(&self, c: Coord) -> Result<(), GridError> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds(c))
        }
    }

    fn check_marker_target(&self, c: Coord) -> Result<(), GridError> {
        self.check_in_bounds(c)?;
        if self.is_endpoint(c) {
            return Err(GridError::Endpoint(c));
        }
        Ok(())
    }

    fn check_endpoint_target(&self, c: Coord, other: Coord) -> Result<(), GridError> {
        self.check_in_bounds(c)?;
        if c == other {
            return Err(GridError::StartEqualsEnd(c));
        }
        if self.obstructed.contains(&c) {
            return Err(GridError::Obstructed(c));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&crate::GridConfig::from(self), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let config = <crate::GridConfig as serde::Deserialize>::deserialize(deserializer)?;
        config.build().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> Grid {
        Grid::new(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap()
    }

    fn neighbors_of(g: &Grid, c: Coord) -> Vec<Coord> {
        let mut buf = Vec::new();
        g.neighbors(c, &mut buf);
        buf
    }

    #[test]
    fn new_validates_dimensions_and_endpoints() {
        assert_eq!(
            Grid::new(0, 3, Coord::ZERO, Coord::new(0, 1)),
            Err(GridError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            Grid::new(3, 3, Coord::new(1, 1), Coord::new(1, 1)),
            Err(GridError::StartEqualsEnd(Coord::new(1, 1)))
        );
        assert_eq!(
            Grid::new(3, 3, Coord::new(0, 0), Coord::new(3, 0)),
            Err(GridError::OutOfBounds(Coord::new(3, 0)))
        );
        let g = grid_3x3();
        assert_eq!(g.len(), 9);
        assert!(g.obstructed().is_empty());
        assert!(g.costly().is_empty());
    }

    #[test]
    fn neighbors_order_and_bounds() {
        let g = grid_3x3();
        assert_eq!(
            neighbors_of(&g, Coord::new(1, 1)),
            vec![
                Coord::new(2, 1),
                Coord::new(0, 1),
                Coord::new(1, 2),
                Coord::new(1, 0),
            ]
        );
        assert_eq!(
            neighbors_of(&g, Coord::new(0, 0)),
            vec![Coord::new(1, 0), Coord::new(0, 1)]
        );
    }

    #[test]
    fn neighbors_skip_walls_but_not_weights() {
        let mut g = grid_3x3();
        g.mark_obstructed(Coord::new(2, 1)).unwrap();
        g.mark_costly(Coord::new(1, 2)).unwrap();
        assert_eq!(
            neighbors_of(&g, Coord::new(1, 1)),
            vec![Coord::new(0, 1), Coord::new(1, 2), Coord::new(1, 0)]
        );
    }

    #[test]
    fn cost_of_weighted_and_plain_cells() {
        let mut g = grid_3x3();
        g.mark_costly(Coord::new(1, 1)).unwrap();
        assert_eq!(g.cost_of(Coord::new(1, 1)), COSTLY_COST);
        assert_eq!(g.cost_of(Coord::new(0, 1)), BASE_COST);
    }

    #[test]
    fn walls_and_weights_are_disjoint() {
        let mut g = grid_3x3();
        let c = Coord::new(1, 1);
        g.mark_costly(c).unwrap();
        g.mark_obstructed(c).unwrap();
        assert!(g.is_obstructed(c));
        assert!(!g.is_costly(c));
        g.mark_costly(c).unwrap();
        assert!(g.is_costly(c));
        assert!(!g.is_obstructed(c));
    }

    #[test]
    fn markers_rejected_on_endpoints_and_outside() {
        let mut g = grid_3x3();
        assert_eq!(
            g.mark_obstructed(Coord::new(0, 0)),
            Err(GridError::Endpoint(Coord::new(0, 0)))
        );
        assert_eq!(
            g.mark_costly(Coord::new(2, 2)),
            Err(GridError::Endpoint(Coord::new(2, 2)))
        );
        assert_eq!(
            g.mark_obstructed(Coord::new(-1, 0)),
            Err(GridError::OutOfBounds(Coord::new(-1, 0)))
        );
        assert!(g.obstructed().is_empty());
        assert!(g.costly().is_empty());
    }

    #[test]
    fn unmark_costly_keeps_walls() {
        let mut g = grid_3x3();
        g.mark_obstructed(Coord::new(0, 1)).unwrap();
        g.mark_costly(Coord::new(1, 0)).unwrap();
        g.unmark_costly(Coord::new(0, 1)).unwrap();
        g.unmark_costly(Coord::new(1, 0)).unwrap();
        assert!(g.is_obstructed(Coord::new(0, 1)));
        assert!(!g.is_costly(Coord::new(1, 0)));
    }

    #[test]
    fn clear_erases_both_markers() {
        let mut g = grid_3x3();
        g.mark_obstructed(Coord::new(0, 1)).unwrap();
        g.mark_costly(Coord::new(1, 0)).unwrap();
        g.clear(Coord::new(0, 1)).unwrap();
        g.clear(Coord::new(1, 0)).unwrap();
        assert!(g.obstructed().is_empty());
        assert!(g.costly().is_empty());
    }

    #[test]
    fn set_start_and_end_enforce_invariants() {
        let mut g = grid_3x3();
        g.mark_obstructed(Coord::new(1, 1)).unwrap();
        assert_eq!(
            g.set_start(Coord::new(2, 2)),
            Err(GridError::StartEqualsEnd(Coord::new(2, 2)))
        );
        assert_eq!(
            g.set_end(Coord::new(1, 1)),
            Err(GridError::Obstructed(Coord::new(1, 1)))
        );
        assert_eq!(
            g.set_end(Coord::new(5, 5)),
            Err(GridError::OutOfBounds(Coord::new(5, 5)))
        );
        assert_eq!(g.start(), Coord::new(0, 0));
        assert_eq!(g.end(), Coord::new(2, 2));

        g.set_start(Coord::new(0, 2)).unwrap();
        g.set_end(Coord::new(2, 0)).unwrap();
        assert_eq!(g.start(), Coord::new(0, 2));
        assert_eq!(g.end(), Coord::new(2, 0));
    }

    #[test]
    fn endpoint_may_sit_on_a_weight() {
        let mut g = grid_3x3();
        g.mark_costly(Coord::new(1, 1)).unwrap();
        g.set_end(Coord::new(1, 1)).unwrap();
        assert!(g.is_costly(g.end()));
    }

    #[test]
    fn reset_drops_markers_only() {
        let mut g = grid_3x3();
        g.set_start(Coord::new(1, 0)).unwrap();
        g.mark_obstructed(Coord::new(0, 1)).unwrap();
        g.mark_costly(Coord::new(1, 1)).unwrap();
        g.reset();
        assert!(g.obstructed().is_empty());
        assert!(g.costly().is_empty());
        assert_eq!(g.start(), Coord::new(1, 0));
    }

    #[test]
    fn resize_repositions_endpoints() {
        let mut g = grid_3x3();
        g.mark_obstructed(Coord::new(1, 1)).unwrap();
        g.resize(10, 12).unwrap();
        assert_eq!((g.rows(), g.cols()), (10, 12));
        assert_eq!(g.start(), Coord::new(2, 2));
        assert_eq!(g.end(), Coord::new(7, 9));
        assert!(g.obstructed().is_empty());
    }

    #[test]
    fn resize_too_small_fails_and_keeps_grid() {
        let mut g = grid_3x3();
        let before = g.clone();
        assert!(g.resize(2, 2).is_err());
        assert_eq!(g, before);
    }

    #[test]
    fn cells_iterates_all() {
        let g = grid_3x3();
        assert_eq!(g.cells().count(), 9);
    }
}
