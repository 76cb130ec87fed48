use gridroute_core::{Coord, Grid};

use crate::distance::manhattan;

/// Minimal search interface: neighbour enumeration only.
pub trait Pather {
    /// Append neighbours of `p` into `buf`. The caller clears `buf` before
    /// calling. The order must be fixed: it decides traversal order.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

/// Pather with weighted (positive-cost) moves.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Coord, to: Coord) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Coord, to: Coord) -> i32;
}

impl Pather for Grid {
    #[inline]
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        Grid::neighbors(self, p, buf);
    }
}

impl WeightedPather for Grid {
    /// Costs are charged on arrival, so only `to` matters.
    #[inline]
    fn cost(&self, _from: Coord, to: Coord) -> i32 {
        self.cost_of(to)
    }
}

impl AstarPather for Grid {
    /// Manhattan distance: every step costs at least 1 and moves are
    /// orthogonal, so it never overestimates.
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> i32 {
        manhattan(from, to)
    }
}
