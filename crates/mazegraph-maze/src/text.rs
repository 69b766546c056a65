//! ASCII-art mazes.
//!
//! A maze `w` cells wide and `h` cells high is drawn on `2h + 1` lines of
//! `2w + 1` characters:
//!
//! ```text
//! +-+-+-+
//! |   3 |
//! +-+ + +
//! | 2 | |
//! +-+-+-+
//! ```
//!
//! Cell `(x, y)` sits at column `2x + 1` of line `2y + 1`. The characters
//! between two cells (and between a cell and the border) describe the wall
//! slot: `-`, `|` or `#` is a wall, a space is an opening of weight
//! [`DEFAULT_WEIGHT`], and a digit is an opening of that weight. Corners and
//! cell interiors are ignored when parsing.

use std::fmt;
use std::str::FromStr;

use mazegraph_core::{Direction, Juncture};

use crate::error::MazeError;
use crate::grid::{DEFAULT_WEIGHT, GridMaze};

impl GridMaze {
    /// Parse a maze from its ASCII drawing.
    ///
    /// Blank lines before and after the drawing are ignored. Every line
    /// must have the same odd width, and every border slot must be a wall.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut lines: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .skip_while(|l| l.trim().is_empty())
            .collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }

        let rows: Vec<Vec<char>> = lines.iter().map(|l| l.chars().collect()).collect();
        let line_width = rows.first().map_or(0, Vec::len);
        if rows.len() < 3 || rows.len() % 2 == 0 || line_width < 3 || line_width % 2 == 0 {
            return Err(MazeError::Parse(format!(
                "expected an odd number (>= 3) of lines of odd width (>= 3), got {} lines of width {}",
                rows.len(),
                line_width
            )));
        }
        if let Some((n, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != line_width) {
            return Err(MazeError::Parse(format!(
                "line {} has width {}, expected {}",
                n + 1,
                row.len(),
                line_width
            )));
        }

        let width = (line_width / 2) as i32;
        let height = (rows.len() / 2) as i32;
        let mut maze = GridMaze::new(width, height)?;

        for j in maze.bounds() {
            for dir in Direction::ALL {
                let (dx, dy) = dir.delta();
                let col = (2 * j.x + 1 + dx) as usize;
                let line = (2 * j.y + 1 + dy) as usize;
                let Some(weight) = slot(rows[line][col], line, col)? else {
                    continue;
                };
                if !maze.contains(j.neighbor(dir)) {
                    return Err(MazeError::Parse(format!(
                        "opening in the border at line {}, column {}",
                        line + 1,
                        col + 1
                    )));
                }
                // Each inner slot is seen from both sides; carving twice is
                // harmless.
                maze.carve(j, dir, weight)?;
            }
        }
        Ok(maze)
    }
}

/// Decode one wall slot: `None` for a wall, `Some(weight)` for an opening.
fn slot(ch: char, line: usize, col: usize) -> Result<Option<i32>, MazeError> {
    match ch {
        '-' | '|' | '#' => Ok(None),
        ' ' => Ok(Some(DEFAULT_WEIGHT)),
        '0'..='9' => Ok(Some(ch as i32 - '0' as i32)),
        other => Err(MazeError::Parse(format!(
            "unexpected {other:?} at line {}, column {}",
            line + 1,
            col + 1
        ))),
    }
}

/// Render an opening: blank for the default weight, a digit for 0-9 and
/// `*` for anything heavier.
fn opening(weight: i32) -> char {
    match weight {
        DEFAULT_WEIGHT => ' ',
        0..=9 => char::from(b'0' + weight as u8),
        _ => '*',
    }
}

impl fmt::Display for GridMaze {
    /// Draw the maze in the format accepted by [`GridMaze::parse`].
    ///
    /// Weights above 9 are drawn as `*`, which does not parse back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bounds();
        for line in 0..=2 * b.height {
            if line > 0 {
                f.write_str("\n")?;
            }
            let mut out = String::with_capacity((2 * b.width + 1) as usize);
            for col in 0..=2 * b.width {
                let cell = Juncture::new(col / 2, line / 2);
                let ch = match (line % 2 == 0, col % 2 == 0) {
                    (true, true) => '+',
                    (false, false) => ' ',
                    // Slot above `cell`; the bottom border has no cell below.
                    (true, false) => match self.weight_toward(cell, Direction::Up) {
                        Some(w) if !self.has_wall(cell, Direction::Up) => opening(w),
                        _ => '-',
                    },
                    // Slot left of `cell`; the right border has no cell.
                    (false, true) => match self.weight_toward(cell, Direction::Left) {
                        Some(w) if !self.has_wall(cell, Direction::Left) => opening(w),
                        _ => '|',
                    },
                };
                out.push(ch);
            }
            f.write_str(&out)?;
        }
        Ok(())
    }
}

impl FromStr for GridMaze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
