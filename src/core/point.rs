//! Board coordinates, directions and submitted moves.
//!
//! ## Axes
//!
//! `x` grows to the right, `y` grows upward:
//! - `Up`: +y
//! - `Down`: -y
//! - `Right`: +x
//! - `Left`: -x
//!
//! ```
//! use map_steps::core::{Direction, Point};
//!
//! let p = Point::new(2, 3);
//! assert_eq!(p.step(4, Direction::Right), Point::new(6, 3));
//! assert_eq!(p.step(4, Direction::None), p);
//! ```

use serde::{Deserialize, Serialize};

/// A board coordinate.
///
/// Value type: two points are the same tile iff their coordinates match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The bottom-left corner of every board.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `magnitude` tiles along `direction`.
    ///
    /// `Direction::None` is the identity.
    #[must_use]
    pub fn step(self, magnitude: i32, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x.wrapping_add(dx.wrapping_mul(magnitude)),
            y: self.y.wrapping_add(dy.wrapping_mul(magnitude)),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Movement direction.
///
/// Discriminants are the wire codes a collaborator submits. `None` stands for
/// an unrecognized code and is never a legal move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    #[default]
    None = 0,
    Up = 1,
    Right = 2,
    Down = 3,
    Left = 4,
}

impl Direction {
    /// The four legal directions, in code order.
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Decode a wire code. Anything outside `1..=4` becomes `None`.
    ///
    /// ```
    /// use map_steps::core::Direction;
    ///
    /// assert_eq!(Direction::from_code(3), Direction::Down);
    /// assert_eq!(Direction::from_code(0), Direction::None);
    /// assert_eq!(Direction::from_code(5), Direction::None);
    /// ```
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Direction::Up,
            2 => Direction::Right,
            3 => Direction::Down,
            4 => Direction::Left,
            _ => Direction::None,
        }
    }

    /// The wire code for this direction.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub const fn is_cardinal(self) -> bool {
        !matches!(self, Direction::None)
    }

    /// The direction that undoes this one. `None` is its own opposite.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::None => Direction::None,
        }
    }

    /// Unit offset `(dx, dy)` for one tile of movement.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::None => (0, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::None => "None",
            Direction::Up => "Up",
            Direction::Right => "Right",
            Direction::Down => "Down",
            Direction::Left => "Left",
        };
        f.write_str(name)
    }
}

/// One step of a submitted solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Number of tiles to travel.
    pub magnitude: i32,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(magnitude: i32, direction: Direction) -> Self {
        Self {
            magnitude,
            direction,
        }
    }
}

impl From<(i32, Direction)> for Move {
    fn from((magnitude, direction): (i32, Direction)) -> Self {
        Self {
            magnitude,
            direction,
        }
    }
}
