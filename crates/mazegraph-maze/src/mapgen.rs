//! Random maze generation.
//!
//! [`MazeGen`] carves a *perfect* maze (exactly one path between any two
//! junctures) out of a fully walled [`GridMaze`] with an iterative
//! recursive-backtracker walk, giving each opening a random weight.

use log::debug;
use mazegraph_core::{Direction, Juncture};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::GridMaze;

/// Parameters for [`MazeGen`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeGenConfig {
    /// Number of columns. Must be positive.
    pub width: i32,
    /// Number of rows. Must be positive.
    pub height: i32,
    /// Smallest weight given to an opening. Must be non-negative.
    pub min_weight: i32,
    /// Largest weight given to an opening (inclusive).
    pub max_weight: i32,
    /// Seed for reproducible mazes; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for MazeGenConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 12,
            min_weight: 1,
            max_weight: 9,
            seed: None,
        }
    }
}

impl MazeGenConfig {
    /// Check the size and weight range.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(MazeError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_weight < 0 {
            return Err(MazeError::NegativeWeight {
                weight: self.min_weight,
            });
        }
        if self.min_weight > self.max_weight {
            return Err(MazeError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        Ok(())
    }
}

/// Random maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: MazeGenConfig,
}

impl MazeGen<StdRng> {
    /// Create a generator seeded from `config.seed`, or from the thread RNG
    /// when no seed is set.
    pub fn new(config: MazeGenConfig) -> Result<Self, MazeError> {
        config.validate()?;
        let seed = match config.seed {
            Some(seed) => seed,
            None => rand::rng().random(),
        };
        debug!(
            "maze generator: {}x{}, weights {}..={}, seed {seed}",
            config.width, config.height, config.min_weight, config.max_weight
        );
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        })
    }
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator driven by a caller-supplied RNG. `config.seed` is
    /// ignored.
    pub fn with_rng(config: MazeGenConfig, rng: R) -> Result<Self, MazeError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    /// Generate a new perfect maze.
    ///
    /// The walk starts at a random juncture. At each step it opens the wall
    /// to a random unvisited neighbour and moves there, backtracking along
    /// its own trail when every neighbour has been visited.
    pub fn generate(&mut self) -> Result<GridMaze, MazeError> {
        let MazeGenConfig {
            width,
            height,
            min_weight,
            max_weight,
            ..
        } = self.config;
        let mut maze = GridMaze::new(width, height)?;
        let bounds = maze.bounds();

        let mut visited = vec![false; bounds.len()];
        let start = Juncture::new(
            self.rng.random_range(0..width),
            self.rng.random_range(0..height),
        );
        let mut trail = vec![start];
        if let Some(i) = bounds.index(start) {
            visited[i] = true;
        }

        let mut options: Vec<Direction> = Vec::with_capacity(4);
        while let Some(&here) = trail.last() {
            options.clear();
            options.extend(Direction::ALL.into_iter().filter(|&d| {
                bounds
                    .index(here.neighbor(d))
                    .is_some_and(|i| !visited[i])
            }));
            if options.is_empty() {
                trail.pop();
                continue;
            }

            let dir = options[self.rng.random_range(0..options.len())];
            let weight = self.rng.random_range(min_weight..=max_weight);
            maze.carve(here, dir, weight)?;

            let next = here.neighbor(dir);
            if let Some(i) = bounds.index(next) {
                visited[i] = true;
            }
            trail.push(next);
        }

        debug!(
            "generated {}x{} maze with {} openings",
            width,
            height,
            maze.opening_count()
        );
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Maze;

    fn config(width: i32, height: i32, seed: u64) -> MazeGenConfig {
        MazeGenConfig {
            width,
            height,
            seed: Some(seed),
            ..MazeGenConfig::default()
        }
    }

    #[test]
    fn perfect_maze_is_a_spanning_tree() {
        let mut mg = MazeGen::new(config(12, 9, 7)).unwrap();
        let maze = mg.generate().unwrap();
        assert_eq!(maze.opening_count(), 12 * 9 - 1);

        let g = maze.graph().unwrap();
        assert_eq!(g.len(), 12 * 9);
        assert_eq!(g.edge_count(), 2 * (12 * 9 - 1));
        // Every juncture reachable from the corner.
        let last = Juncture::new(11, 8);
        assert!(g.bfs(&Juncture::new(0, 0), &last).unwrap());
    }

    #[test]
    fn weights_within_range() {
        let cfg = MazeGenConfig {
            min_weight: 3,
            max_weight: 5,
            ..config(8, 8, 99)
        };
        let maze = MazeGen::new(cfg).unwrap().generate().unwrap();
        for j in maze.bounds() {
            for d in Direction::ALL {
                if !maze.is_wall(j, d) {
                    assert!((3..=5).contains(&maze.weight(j, d)));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGen::new(config(10, 10, 1234)).unwrap().generate().unwrap();
        let b = MazeGen::new(config(10, 10, 1234)).unwrap().generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unseeded_generation_works() {
        let cfg = MazeGenConfig {
            width: 5,
            height: 4,
            ..MazeGenConfig::default()
        };
        let maze = MazeGen::with_rng(cfg, rand::rng()).unwrap().generate().unwrap();
        assert_eq!(maze.opening_count(), 19);
    }

    #[test]
    fn single_cell() {
        let maze = MazeGen::new(config(1, 1, 0)).unwrap().generate().unwrap();
        assert_eq!(maze.opening_count(), 0);
        assert_eq!(maze.graph().unwrap().len(), 1);
    }

    #[test]
    fn invalid_configs() {
        assert_eq!(
            MazeGen::new(config(0, 3, 1)).err(),
            Some(MazeError::InvalidSize {
                width: 0,
                height: 3
            })
        );
        let negative = MazeGenConfig {
            min_weight: -1,
            ..config(3, 3, 1)
        };
        assert_eq!(
            negative.validate(),
            Err(MazeError::NegativeWeight { weight: -1 })
        );
        let inverted = MazeGenConfig {
            min_weight: 6,
            max_weight: 2,
            ..config(3, 3, 1)
        };
        assert_eq!(
            MazeGen::with_rng(inverted, rand::rng()).err(),
            Some(MazeError::InvalidWeightRange { min: 6, max: 2 })
        );
    }
}
