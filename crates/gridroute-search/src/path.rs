use std::collections::HashMap;

use gridroute_core::Coord;

use crate::traits::WeightedPather;

/// Maps each discovered cell to the cell it was reached from.
///
/// Unweighted searches record a cell once, at discovery. Weighted searches
/// overwrite an entry only when they find a strictly cheaper route.
#[derive(Debug, Clone, Default)]
pub struct Predecessors {
    prev: HashMap<Coord, Coord>,
}

impl Predecessors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `cell` was reached from `from`.
    #[inline]
    pub fn record(&mut self, cell: Coord, from: Coord) {
        self.prev.insert(cell, from);
    }

    #[inline]
    pub fn get(&self, cell: Coord) -> Option<Coord> {
        self.prev.get(&cell).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prev.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prev.is_empty()
    }

    /// Walk back from `end` to `start` and return the route `start..=end`.
    ///
    /// Returns an empty path when the chain breaks before reaching `start`,
    /// or loops without reaching it.
    pub fn reconstruct(&self, start: Coord, end: Coord) -> Vec<Coord> {
        let mut path = vec![end];
        let mut cur = end;
        // A chain through every recorded cell has at most len() links.
        for _ in 0..=self.prev.len() {
            if cur == start {
                path.reverse();
                return path;
            }
            match self.get(cur) {
                Some(p) => {
                    path.push(p);
                    cur = p;
                }
                None => return Vec::new(),
            }
        }
        Vec::new()
    }
}

/// Total arrival cost along `path`. The first cell is never charged; an
/// empty or single-cell path costs 0.
pub fn path_cost<P: WeightedPather>(pather: &P, path: &[Coord]) -> i32 {
    path.windows(2).map(|w| pather.cost(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::Grid;

    fn chain(links: &[((i32, i32), (i32, i32))]) -> Predecessors {
        let mut preds = Predecessors::new();
        for &(cell, from) in links {
            preds.record(cell.into(), from.into());
        }
        preds
    }

    #[test]
    fn reconstruct_reads_start_to_end() {
        let preds = chain(&[((0, 1), (0, 0)), ((1, 1), (0, 1)), ((2, 1), (1, 1))]);
        assert_eq!(
            preds.reconstruct(Coord::new(0, 0), Coord::new(2, 1)),
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(2, 1),
            ]
        );
    }

    #[test]
    fn reconstruct_missing_link_is_empty() {
        let preds = chain(&[((2, 1), (1, 1))]);
        assert!(preds.reconstruct(Coord::new(0, 0), Coord::new(2, 1)).is_empty());
        assert!(Predecessors::new()
            .reconstruct(Coord::new(0, 0), Coord::new(1, 0))
            .is_empty());
    }

    #[test]
    fn reconstruct_cycle_is_empty() {
        let preds = chain(&[((0, 1), (0, 2)), ((0, 2), (0, 1))]);
        assert!(preds.reconstruct(Coord::new(0, 0), Coord::new(0, 1)).is_empty());
    }

    #[test]
    fn reconstruct_start_is_end() {
        let preds = Predecessors::new();
        assert_eq!(
            preds.reconstruct(Coord::new(3, 3), Coord::new(3, 3)),
            vec![Coord::new(3, 3)]
        );
    }

    #[test]
    fn path_cost_charges_arrivals() {
        let mut g = Grid::new(1, 4, Coord::new(0, 0), Coord::new(0, 3)).unwrap();
        g.mark_costly(Coord::new(0, 1)).unwrap();
        let path: Vec<Coord> = (0..4).map(|c| Coord::new(0, c)).collect();
        assert_eq!(path_cost(&g, &path), 5 + 1 + 1);
        assert_eq!(path_cost(&g, &path[..1]), 0);
        assert_eq!(path_cost(&g, &[]), 0);
    }
}
