use mazegraph_core::Direction;
use mazegraph_paths::GraphError;
use thiserror::Error;

/// Errors raised while building, editing or generating mazes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze size {width}x{height} is invalid: both dimensions must be positive")]
    InvalidSize { width: i32, height: i32 },

    #[error("juncture ({x}, {y}) is outside the maze")]
    OutOfBounds { x: i32, y: i32 },

    /// The outer border is always walled so that no juncture outside the
    /// maze can become a graph vertex.
    #[error("border wall {dir} of ({x}, {y}) cannot be removed")]
    BorderWall { x: i32, y: i32, dir: Direction },

    #[error("invalid weight {weight}: weights must be non-negative")]
    NegativeWeight { weight: i32 },

    #[error("invalid weight range {min}..={max}")]
    InvalidWeightRange { min: i32, max: i32 },

    #[error("maze of {expected} junctures has {found} cells")]
    CellCount { expected: usize, found: usize },

    #[error("maze parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
