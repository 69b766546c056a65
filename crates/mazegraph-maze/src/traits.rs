use mazegraph_core::{Bounds, Direction, Juncture};

/// Read-only view of a rectangular maze.
///
/// Junctures are addressed by `(x, y)` with `(0, 0)` in the upper left
/// corner. Implementations must report a wall on every side that faces out
/// of the maze: graph construction trusts these predicates and performs no
/// bounds checks of its own.
pub trait Maze {
    /// Number of columns.
    fn width(&self) -> i32;

    /// Number of rows.
    fn height(&self) -> i32;

    fn is_wall_above(&self, j: Juncture) -> bool;
    fn is_wall_below(&self, j: Juncture) -> bool;
    fn is_wall_to_left(&self, j: Juncture) -> bool;
    fn is_wall_to_right(&self, j: Juncture) -> bool;

    /// Cost of moving up out of `j`. Must be non-negative.
    fn weight_above(&self, j: Juncture) -> i32;
    fn weight_below(&self, j: Juncture) -> i32;
    fn weight_to_left(&self, j: Juncture) -> i32;
    fn weight_to_right(&self, j: Juncture) -> i32;

    /// The rectangle covered by the maze.
    fn bounds(&self) -> Bounds {
        Bounds::new(self.width(), self.height())
    }

    /// Wall query by direction.
    fn is_wall(&self, j: Juncture, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.is_wall_above(j),
            Direction::Down => self.is_wall_below(j),
            Direction::Left => self.is_wall_to_left(j),
            Direction::Right => self.is_wall_to_right(j),
        }
    }

    /// Weight query by direction.
    fn weight(&self, j: Juncture, dir: Direction) -> i32 {
        match dir {
            Direction::Up => self.weight_above(j),
            Direction::Down => self.weight_below(j),
            Direction::Left => self.weight_to_left(j),
            Direction::Right => self.weight_to_right(j),
        }
    }
}
