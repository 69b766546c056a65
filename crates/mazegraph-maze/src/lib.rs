//! Mazes as weighted graphs.
//!
//! A maze is a rectangle of junctures separated by walls; every opening has
//! a non-negative weight. [`Maze`] is the query interface the graph builder
//! needs, [`GridMaze`] a ready-made implementation that can be drawn, parsed
//! and randomly generated with [`MazeGen`]. [`maze_graph`] turns any maze
//! into a [`MazeGraph`] searchable with BFS, DFS or Dijkstra.
//!
//! ```
//! use mazegraph_core::Juncture;
//! use mazegraph_maze::GridMaze;
//!
//! let maze: GridMaze = "+-+-+\n|   |\n+-+-+".parse().unwrap();
//! let graph = maze.graph().unwrap();
//! let path = graph
//!     .dijkstra(&Juncture::new(0, 0), &Juncture::new(1, 0))
//!     .unwrap();
//! assert_eq!(path.len(), 2);
//! ```

mod construct;
mod error;
mod grid;
mod mapgen;
mod text;
mod traits;

pub use construct::{MazeGraph, maze_graph};
pub use error::MazeError;
pub use grid::{DEFAULT_WEIGHT, GridMaze};
pub use mapgen::{MazeGen, MazeGenConfig};
pub use traits::Maze;
