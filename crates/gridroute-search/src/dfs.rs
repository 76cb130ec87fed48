use std::collections::HashSet;

use gridroute_core::Coord;

use crate::path::Predecessors;
use crate::traits::Pather;

/// Depth-first frontier: last in, first out.
///
/// Uses the same seen-on-push discipline as [`Bfs`](crate::bfs::Bfs). The
/// route it finds depends on neighbour order and is generally not the
/// shortest one.
#[derive(Debug)]
pub(crate) struct Dfs {
    stack: Vec<Coord>,
    seen: HashSet<Coord>,
}

impl Dfs {
    pub(crate) fn new(start: Coord) -> Self {
        Self {
            stack: vec![start],
            seen: HashSet::from([start]),
        }
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Coord> {
        self.stack.pop()
    }

    /// Push every undiscovered neighbour of `cell`; the last one pushed is
    /// explored next.
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
                self.stack.push(n);
            }
        }
    }
}
