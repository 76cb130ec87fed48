use std::collections::{HashMap, HashSet};

use gridroute_core::Coord;

use crate::heap::PriorityQueue;
use crate::path::Predecessors;
use crate::traits::AstarPather;

/// Best-first frontier ordered by `g + h`.
///
/// `g` is the accumulated cost from the start, relaxed exactly as in
/// Dijkstra; `h` is the pather's estimate to the goal. With a consistent
/// estimate the first pop of the goal carries an optimal `g`. Stale entries
/// are discarded at pop time through the finalized set.
#[derive(Debug)]
pub(crate) struct Astar {
    goal: Coord,
    g: HashMap<Coord, i32>,
    finalized: HashSet<Coord>,
    open: PriorityQueue<Coord>,
}

impl Astar {
    pub(crate) fn new<P: AstarPather>(pather: &P, start: Coord, goal: Coord) -> Self {
        let mut open = PriorityQueue::new();
        open.push(pather.estimate(start, goal), start);
        Self {
            goal,
            g: HashMap::from([(start, 0)]),
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
    pub(crate) fn expand<P: AstarPather>(
        &mut self,
        pather: &P,
        cell: Coord,
        nbuf: &mut Vec<Coord>,
        preds: &mut Predecessors,
    ) {
        let Some(&current_g) = self.g.get(&cell) else {
            return;
        };
        nbuf.clear();
        pather.neighbors(cell, nbuf);
        for &n in nbuf.iter() {
            let tentative_g = current_g + pather.cost(cell, n);
            if self.g.get(&n).is_some_and(|&g| tentative_g >= g) {
                continue;
            }
            self.g.insert(n, tentative_g);
            preds.record(n, cell);
            self.open.push(tentative_g + pather.estimate(n, self.goal), n);
        }
    }
}
