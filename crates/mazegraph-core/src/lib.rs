//! **mazegraph-core** — core grid types shared across the *mazegraph*
//! workspace.
//!
//! [`Juncture`] is the vertex type of maze graphs, [`Direction`] names the
//! four openings of a maze cell and [`Bounds`] describes the rectangle a
//! maze occupies.

pub mod geom;

pub use geom::{Bounds, BoundsIter, Direction, Juncture};
