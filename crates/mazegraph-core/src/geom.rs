//! Geometry primitives: [`Juncture`], [`Direction`] and [`Bounds`].
//!
//! Coordinates follow the usual screen convention: `(0, 0)` is the upper
//! left corner, X grows right and Y grows down.

use std::fmt;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal directions a maze cell can open towards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order maze construction queries them.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit offset `(dx, dy)` for one step in this direction.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Dense index in `0..4`, matching the order of [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Juncture
// ---------------------------------------------------------------------------

/// A maze cell identified by its grid coordinates.
///
/// Junctures are plain values: two junctures are equal (and hash equally)
/// exactly when their coordinates match, which is what lets them serve as
/// graph vertices.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Juncture {
    pub x: i32,
    pub y: i32,
}

impl Juncture {
    /// Create a new juncture.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a juncture shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent juncture one step in `dir`.
    #[inline]
    pub const fn neighbor(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        self.shift(dx, dy)
    }

    /// The four adjacent junctures, in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Juncture; 4] {
        Direction::ALL.map(|d| self.neighbor(d))
    }
}

impl PartialOrd for Juncture {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Juncture {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Juncture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Juncture {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The `width x height` rectangle of junctures anchored at `(0, 0)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Create new bounds. Negative sizes are clamped to zero.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Total number of junctures.
    #[inline]
    pub fn len(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the bounds hold no juncture at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether `j` lies inside the bounds.
    #[inline]
    pub fn contains(self, j: Juncture) -> bool {
        j.x >= 0 && j.x < self.width && j.y >= 0 && j.y < self.height
    }

    /// Row-major flat index of `j`, or `None` if outside.
    #[inline]
    pub fn index(self, j: Juncture) -> Option<usize> {
        if !self.contains(j) {
            return None;
        }
        Some((j.y as usize) * (self.width as usize) + (j.x as usize))
    }

    /// Row-major iterator over every juncture (y outer, x inner).
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Juncture::new(0, 0),
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Juncture;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Row-major iterator over the junctures in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Juncture,
}

impl Iterator for BoundsIter {
    type Item = Juncture;

    #[inline]
    fn next(&mut self) -> Option<Juncture> {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.height {
            return None;
        }
        let j = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.bounds.width {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(j)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.height {
            return (0, Some(0));
        }
        let w = self.bounds.width as usize;
        let remaining_in_row = (self.bounds.width - self.cur.x) as usize;
        let remaining_rows = (self.bounds.height - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}
