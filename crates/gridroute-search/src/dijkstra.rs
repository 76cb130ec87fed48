use std::collections::{HashMap, HashSet};

use gridroute_core::Coord;

use crate::heap::PriorityQueue;
use crate::path::Predecessors;
use crate::traits::WeightedPather;

/// Lowest-cost-first frontier.
///
/// A cell may sit in the queue several times with different distances; only
/// its first pop finalizes it and later pops are skipped. A popped cell's
/// distance is therefore final, which is why the search stops on the pop of
/// the end cell rather than on its discovery.
#[derive(Debug)]
pub(crate) struct Dijkstra {
    distance: HashMap<Coord, i32>,
    finalized: HashSet<Coord>,
    open: PriorityQueue<Coord>,
}

impl Dijkstra {
    pub(crate) fn new(start: Coord) -> Self {
        let mut open = PriorityQueue::new();
        open.push(0, start);
        Self {
            distance: HashMap::from([(start, 0)]),
            finalized: HashSet::new(),
            open,
        }
    }

    /// Finalize and return the next cell, skipping stale entries.
    pub(crate) fn pop(&mut self) -> Option<Coord> {
        while let Some((_, cell)) = self.open.pop() {
            if self.finalized.insert(cell) {
                return Some(cell);
            }
        }
        None
    }

    /// Relax every neighbour of the finalized `cell`.
    pub(crate) fn expand<P: WeightedPather>(
        &mut self,
        pather: &P,
        cell: Coord,
        nbuf: &mut Vec<Coord>,
        preds: &mut Predecessors,
    ) {
        let Some(&current) = self.distance.get(&cell) else {
            return;
        };
        nbuf.clear();
        pather.neighbors(cell, nbuf);
        for &n in nbuf.iter() {
            let candidate = current + pather.cost(cell, n);
            if self.distance.get(&n).is_some_and(|&d| candidate >= d) {
                continue;
            }
            self.distance.insert(n, candidate);
            preds.record(n, cell);
            self.open.push(candidate, n);
        }
    }

    /// Best known distance from the start to `cell`.
    #[cfg(test)]
    pub(crate) fn distance(&self, cell: Coord) -> Option<i32> {
        self.distance.get(&cell).copied()
    }
}
