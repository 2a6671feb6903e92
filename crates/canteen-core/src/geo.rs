//! Integer grid coordinates and the distance/step helpers built on them.
//!
//! `Position` uses signed coordinates so that neighbour and step arithmetic
//! can go below zero before the grid's bounds check rejects it.

use std::fmt;

/// The 8 Moore-neighbourhood offsets (center excluded), in row-major order.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A cell coordinate on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|ax - bx| + |ay - by|`.
    #[inline]
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cell one greedy step from `self` toward `destination`.
    ///
    /// Each axis moves by the sign of its delta, so diagonal steps are taken
    /// while both axes differ.  Returns `self` when already at `destination`.
    #[inline]
    pub fn step_toward(self, destination: Position) -> Position {
        Position {
            x: self.x + (destination.x - self.x).signum(),
            y: self.y + (destination.y - self.y).signum(),
        }
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Position {
        Position { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
