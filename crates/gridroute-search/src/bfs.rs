use std::collections::{HashSet, VecDeque};

use gridroute_core::Coord;

use crate::path::Predecessors;
use crate::traits::Pather;

/// Breadth-first frontier: first in, first out.
///
/// Cells are marked seen when enqueued, so each cell enters the queue at most
/// once and keeps the predecessor it was discovered from. On a unit-cost grid
/// the first time a cell is dequeued its edge count from the start is minimal.
#[derive(Debug)]
pub(crate) struct Bfs {
    queue: VecDeque<Coord>,
    seen: HashSet<Coord>,
}

impl Bfs {
    pub(crate) fn new(start: Coord) -> Self {
        Self {
            queue: VecDeque::from([start]),
            seen: HashSet::from([start]),
        }
    }

    /// Next cell to visit, or `None` once the frontier is exhausted.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Coord> {
        self.queue.pop_front()
    }

    /// Enqueue every undiscovered neighbour of `cell`.
    pub(crate) fn expand<P: Pather>(
        &mut self,
        pather: &P,
        cell: Coord,
        nbuf: &mut Vec<Coord>,
        preds: &mut Predecessors,
    ) {
        nbuf.clear();
        pather.neighbors(cell, nbuf);
        for &n in nbuf.iter() {
            if self.seen.insert(n) {
                preds.record(n, cell);
                self.queue.push_back(n);
            }
        }
    }
}
