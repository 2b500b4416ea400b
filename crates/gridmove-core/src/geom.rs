//! Geometry primitives: [`Point`] and [`Dir`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Dir> for Point {
    type Output = Self;
    #[inline]
    fn add(self, d: Dir) -> Self {
        self + d.delta()
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four orthogonal unit moves.
///
/// A path is a `Vec<Dir>` read start → destination, one tile per element.
/// `Up` decreases y, matching the screen-coordinate convention of [`Point`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// The four cardinal directions, in declaration order.
    pub const CARDINALS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    /// The unit step vector for this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Dir::Up => Point::new(0, -1),
            Dir::Right => Point::new(1, 0),
            Dir::Down => Point::new(0, 1),
            Dir::Left => Point::new(-1, 0),
        }
    }

    /// The reverse direction (vector negation).
    #[inline]
    pub const fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }
}
