//! A concrete wall-and-weight maze stored as a flat grid.
//!
//! [`GridMaze`] keeps, for every juncture, one wall flag and one weight per
//! [`Direction`]. Both sides of a shared wall are always updated together,
//! so the maze reads the same from either cell. The outer border is always
//! walled.

use mazegraph_core::{Bounds, Direction, Juncture};
use mazegraph_paths::WeightedGraph;

use crate::construct::maze_graph;
use crate::error::MazeError;
use crate::traits::Maze;

/// Weight given to every opening unless set otherwise.
pub const DEFAULT_WEIGHT: i32 = 1;

/// Walls and weights of a single juncture, indexed by [`Direction::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Sides {
    walls: [bool; 4],
    weights: [i32; 4],
}

impl Default for Sides {
    fn default() -> Self {
        Self {
            walls: [true; 4],
            weights: [DEFAULT_WEIGHT; 4],
        }
    }
}

/// A rectangular maze with per-direction walls and weights.
///
/// Deserialized mazes are checked like constructed ones: the cell count
/// must match the bounds, the border must be walled and no weight may be
/// negative.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridMaze"))]
pub struct GridMaze {
    bounds: Bounds,
    cells: Vec<Sides>,
}

/// Unchecked wire form of [`GridMaze`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridMaze {
    bounds: Bounds,
    cells: Vec<Sides>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridMaze> for GridMaze {
    type Error = MazeError;

    fn try_from(raw: RawGridMaze) -> Result<Self, Self::Error> {
        let RawGridMaze { bounds, cells } = raw;
        if bounds.width <= 0 || bounds.height <= 0 {
            return Err(MazeError::InvalidSize {
                width: bounds.width,
                height: bounds.height,
            });
        }
        if cells.len() != bounds.len() {
            return Err(MazeError::CellCount {
                expected: bounds.len(),
                found: cells.len(),
            });
        }
        for (j, sides) in bounds.iter().zip(&cells) {
            for dir in Direction::ALL {
                if sides.weights[dir.index()] < 0 {
                    return Err(MazeError::NegativeWeight {
                        weight: sides.weights[dir.index()],
                    });
                }
                if !sides.walls[dir.index()] && !bounds.contains(j.neighbor(dir)) {
                    return Err(MazeError::BorderWall { x: j.x, y: j.y, dir });
                }
            }
        }
        Ok(Self { bounds, cells })
    }
}

impl GridMaze {
    /// Create a maze where every juncture is walled in on all four sides.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::InvalidSize { width, height });
        }
        let bounds = Bounds::new(width, height);
        Ok(Self {
            bounds,
            cells: vec![Sides::default(); bounds.len()],
        })
    }

    /// Create a maze with no internal walls, every opening costing `weight`.
    pub fn open(width: i32, height: i32, weight: i32) -> Result<Self, MazeError> {
        if weight < 0 {
            return Err(MazeError::NegativeWeight { weight });
        }
        let mut maze = Self::new(width, height)?;
        for j in maze.bounds {
            for dir in [Direction::Down, Direction::Right] {
                if maze.bounds.contains(j.neighbor(dir)) {
                    maze.carve(j, dir, weight)?;
                }
            }
        }
        Ok(maze)
    }

    /// The rectangle covered by the maze.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether `j` lies inside the maze.
    #[inline]
    pub fn contains(&self, j: Juncture) -> bool {
        self.bounds.contains(j)
    }

    /// Whether there is a wall on side `dir` of `j`.
    ///
    /// Junctures outside the maze are walled on every side.
    pub fn has_wall(&self, j: Juncture, dir: Direction) -> bool {
        match self.bounds.index(j) {
            Some(i) => self.cells[i].walls[dir.index()],
            None => true,
        }
    }

    /// Weight of moving out of `j` through side `dir`, or `None` outside the
    /// maze.
    pub fn weight_toward(&self, j: Juncture, dir: Direction) -> Option<i32> {
        self.bounds
            .index(j)
            .map(|i| self.cells[i].weights[dir.index()])
    }

    /// Raise or remove the wall on side `dir` of `j`, and the matching wall
    /// of the neighbour across it.
    ///
    /// Border walls cannot be removed; raising one is a no-op.
    pub fn set_wall(&mut self, j: Juncture, dir: Direction, wall: bool) -> Result<(), MazeError> {
        let i = self.index(j)?;
        let n = j.neighbor(dir);
        let Some(ni) = self.bounds.index(n) else {
            if wall {
                return Ok(());
            }
            return Err(MazeError::BorderWall { x: j.x, y: j.y, dir });
        };
        self.cells[i].walls[dir.index()] = wall;
        self.cells[ni].walls[dir.opposite().index()] = wall;
        Ok(())
    }

    /// Set the weight of side `dir` of `j`, and of the matching side of the
    /// neighbour across it.
    pub fn set_weight(&mut self, j: Juncture, dir: Direction, weight: i32) -> Result<(), MazeError> {
        if weight < 0 {
            return Err(MazeError::NegativeWeight { weight });
        }
        let i = self.index(j)?;
        self.cells[i].weights[dir.index()] = weight;
        if let Some(ni) = self.bounds.index(j.neighbor(dir)) {
            self.cells[ni].weights[dir.opposite().index()] = weight;
        }
        Ok(())
    }

    /// Remove the wall on side `dir` of `j` and give the opening `weight`.
    pub fn carve(&mut self, j: Juncture, dir: Direction, weight: i32) -> Result<(), MazeError> {
        if weight < 0 {
            return Err(MazeError::NegativeWeight { weight });
        }
        self.set_wall(j, dir, false)?;
        self.set_weight(j, dir, weight)
    }

    /// Number of open internal walls, each shared wall counted once.
    pub fn opening_count(&self) -> usize {
        self.bounds
            .iter()
            .map(|j| {
                [Direction::Down, Direction::Right]
                    .into_iter()
                    .filter(|&d| !self.has_wall(j, d))
                    .count()
            })
            .sum()
    }

    /// Build the weighted graph of this maze. See [`maze_graph`].
    pub fn graph(&self) -> Result<WeightedGraph<Juncture>, MazeError> {
        Ok(maze_graph(self)?)
    }

    #[inline]
    fn index(&self, j: Juncture) -> Result<usize, MazeError> {
        self.bounds
            .index(j)
            .ok_or(MazeError::OutOfBounds { x: j.x, y: j.y })
    }
}

impl Maze for GridMaze {
    fn width(&self) -> i32 {
        self.bounds.width
    }

    fn height(&self) -> i32 {
        self.bounds.height
    }

    fn is_wall_above(&self, j: Juncture) -> bool {
        self.has_wall(j, Direction::Up)
    }

    fn is_wall_below(&self, j: Juncture) -> bool {
        self.has_wall(j, Direction::Down)
    }

    fn is_wall_to_left(&self, j: Juncture) -> bool {
        self.has_wall(j, Direction::Left)
    }

    fn is_wall_to_right(&self, j: Juncture) -> bool {
        self.has_wall(j, Direction::Right)
    }

    fn weight_above(&self, j: Juncture) -> i32 {
        self.weight_toward(j, Direction::Up).unwrap_or(0)
    }

    fn weight_below(&self, j: Juncture) -> i32 {
        self.weight_toward(j, Direction::Down).unwrap_or(0)
    }

    fn weight_to_left(&self, j: Juncture) -> i32 {
        self.weight_toward(j, Direction::Left).unwrap_or(0)
    }

    fn weight_to_right(&self, j: Juncture) -> i32 {
        self.weight_toward(j, Direction::Right).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_fully_walled() {
        let m = GridMaze::new(3, 2).unwrap();
        assert_eq!(m.bounds(), Bounds::new(3, 2));
        for j in m.bounds() {
            for d in Direction::ALL {
                assert!(m.is_wall(j, d));
                assert_eq!(m.weight(j, d), DEFAULT_WEIGHT);
            }
        }
        assert_eq!(m.opening_count(), 0);
    }

    #[test]
    fn invalid_size() {
        assert_eq!(
            GridMaze::new(0, 4),
            Err(MazeError::InvalidSize {
                width: 0,
                height: 4
            })
        );
        assert!(GridMaze::open(3, -1, 1).is_err());
    }

    #[test]
    fn open_has_only_border_walls() {
        let m = GridMaze::open(3, 3, 4).unwrap();
        let c = Juncture::new(1, 1);
        for d in Direction::ALL {
            assert!(!m.is_wall(c, d));
            assert_eq!(m.weight(c, d), 4);
        }
        let corner = Juncture::new(0, 0);
        assert!(m.is_wall_above(corner));
        assert!(m.is_wall_to_left(corner));
        assert!(!m.is_wall_below(corner));
        assert!(!m.is_wall_to_right(corner));
        // 3 rows x 2 + 3 columns x 2
        assert_eq!(m.opening_count(), 12);
    }

    #[test]
    fn walls_are_shared() {
        let mut m = GridMaze::new(2, 2).unwrap();
        let a = Juncture::new(0, 0);
        m.set_wall(a, Direction::Right, false).unwrap();
        assert!(!m.is_wall_to_right(a));
        assert!(!m.is_wall_to_left(Juncture::new(1, 0)));
        m.set_wall(Juncture::new(1, 0), Direction::Left, true).unwrap();
        assert!(m.is_wall_to_right(a));
    }

    #[test]
    fn weights_are_shared() {
        let mut m = GridMaze::open(2, 1, 1).unwrap();
        m.set_weight(Juncture::new(1, 0), Direction::Left, 7).unwrap();
        assert_eq!(m.weight_to_right(Juncture::new(0, 0)), 7);
        assert_eq!(m.weight_to_left(Juncture::new(1, 0)), 7);
        assert_eq!(
            m.set_weight(Juncture::new(0, 0), Direction::Right, -1),
            Err(MazeError::NegativeWeight { weight: -1 })
        );
    }

    #[test]
    fn border_walls_stay() {
        let mut m = GridMaze::new(2, 2).unwrap();
        let j = Juncture::new(1, 0);
        assert_eq!(
            m.set_wall(j, Direction::Up, false),
            Err(MazeError::BorderWall {
                x: 1,
                y: 0,
                dir: Direction::Up
            })
        );
        assert!(m.set_wall(j, Direction::Right, true).is_ok());
        assert!(m.is_wall_above(j));
        assert!(matches!(
            m.carve(j, Direction::Right, 1),
            Err(MazeError::BorderWall { .. })
        ));
    }

    #[test]
    fn outside_is_walled() {
        let m = GridMaze::open(2, 2, 1).unwrap();
        let outside = Juncture::new(5, -1);
        for d in Direction::ALL {
            assert!(m.is_wall(outside, d));
        }
        assert_eq!(m.weight_toward(outside, Direction::Up), None);
        assert_eq!(m.weight_above(outside), 0);
    }

    #[test]
    fn out_of_bounds_edits() {
        let mut m = GridMaze::new(2, 2).unwrap();
        assert_eq!(
            m.set_wall(Juncture::new(2, 0), Direction::Left, false),
            Err(MazeError::OutOfBounds { x: 2, y: 0 })
        );
        assert_eq!(
            m.set_weight(Juncture::new(0, 9), Direction::Up, 3),
            Err(MazeError::OutOfBounds { x: 0, y: 9 })
        );
    }

    #[test]
    fn graph_of_open_maze() {
        let m = GridMaze::open(2, 2, 3).unwrap();
        let g = m.graph().unwrap();
        assert_eq!(g.len(), 4);
        assert_eq!(g.edge_count(), 8);
    }
}
