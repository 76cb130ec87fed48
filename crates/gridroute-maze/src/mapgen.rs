use gridroute_core::Grid;
use rand::{Rng, RngExt};

/// Sampling densities for [`MazeGen`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Probability (0.0–1.0) that a cell becomes a wall.
    pub wall_density: f64,
    /// Probability (0.0–1.0) that a cell which did not become a wall
    /// becomes a weight.
    pub weight_density: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            wall_density: 0.28,
            weight_density: 0.10,
        }
    }
}

/// How many markers a generation pass placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazeStats {
    pub walls: usize,
    pub weights: usize,
}

/// Random maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: MazeConfig,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R, config: MazeConfig) -> Self {
        Self { rng, config }
    }

    /// Replace every wall and weight of `grid` with a fresh random layout.
    ///
    /// The start and end cells are left open. Densities outside 0.0–1.0 are
    /// clamped.
    pub fn generate(&mut self, grid: &mut Grid) -> MazeStats {
        let wall_density = self.config.wall_density.clamp(0.0, 1.0);
        let weight_density = self.config.weight_density.clamp(0.0, 1.0);
        grid.reset();

        let mut stats = MazeStats::default();
        for c in grid.cells() {
            if grid.is_endpoint(c) {
                continue;
            }
            let r: f64 = self.rng.random();
            if r < wall_density {
                if grid.mark_obstructed(c).is_ok() {
                    stats.walls += 1;
                }
                continue;
            }
            let r: f64 = self.rng.random();
            if r < weight_density && grid.mark_costly(c).is_ok() {
                stats.weights += 1;
            }
        }

        log::debug!(
            "maze on {}x{}: {} walls, {} weights",
            grid.rows(),
            grid.cols(),
            stats.walls,
            stats.weights
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::{Coord, GridConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64, config: MazeConfig) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed), config)
    }

    #[test]
    fn endpoints_stay_open() {
        let mut g = GridConfig::default().build().unwrap();
        let config = MazeConfig {
            wall_density: 1.0,
            weight_density: 0.0,
        };
        let stats = seeded(1, config).generate(&mut g);
        assert_eq!(stats.walls, g.len() - 2);
        assert!(!g.is_obstructed(g.start()));
        assert!(!g.is_obstructed(g.end()));
    }

    #[test]
    fn zero_densities_leave_grid_empty() {
        let mut g = GridConfig::default().build().unwrap();
        g.mark_obstructed(Coord::new(0, 0)).unwrap();
        let config = MazeConfig {
            wall_density: 0.0,
            weight_density: 0.0,
        };
        assert_eq!(seeded(2, config).generate(&mut g), MazeStats::default());
        assert!(g.obstructed().is_empty());
        assert!(g.costly().is_empty());
    }

    #[test]
    fn weights_fill_non_walls_at_full_density() {
        let mut g = GridConfig::sized(10, 10).build().unwrap();
        let config = MazeConfig {
            wall_density: 0.3,
            weight_density: 1.0,
        };
        let stats = seeded(3, config).generate(&mut g);
        assert_eq!(stats.walls + stats.weights, g.len() - 2);
        assert_eq!(g.obstructed().len(), stats.walls);
        assert_eq!(g.costly().len(), stats.weights);
    }

    #[test]
    fn same_seed_same_maze() {
        let base = GridConfig::default().build().unwrap();
        let mut a = base.clone();
        let mut b = base.clone();
        seeded(42, MazeConfig::default()).generate(&mut a);
        seeded(42, MazeConfig::default()).generate(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn default_densities_are_roughly_respected() {
        let mut g = GridConfig::sized(60, 80).build().unwrap();
        let stats = seeded(7, MazeConfig::default()).generate(&mut g);
        let total = (g.len() - 2) as f64;
        let wall_ratio = stats.walls as f64 / total;
        assert!((0.22..0.34).contains(&wall_ratio), "{wall_ratio}");
        assert!(stats.weights > 0);
    }

    #[test]
    fn out_of_range_densities_are_clamped() {
        let mut g = GridConfig::sized(5, 10).build().unwrap();
        let config = MazeConfig {
            wall_density: 3.0,
            weight_density: -1.0,
        };
        let stats = seeded(9, config).generate(&mut g);
        assert_eq!(stats.walls, g.len() - 2);
        assert_eq!(stats.weights, 0);
    }
}
