//! Grid coordinates and orthogonal directions.
//!
//! Coordinates are signed so that a push can name a tile just past the
//! board edge; bounds are checked against the `Board`, never assumed.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A tile on the grid. `x` grows toward the right column, `y` toward the
/// bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two tiles, saturating at `u32::MAX`.
    #[must_use]
    pub const fn distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// The tile `steps` tiles away in `direction`, clamped to the `i32`
    /// range.
    #[must_use]
    pub const fn step(self, direction: Direction, steps: i32) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(
            self.x.saturating_add(dx.saturating_mul(steps)),
            self.y.saturating_add(dy.saturating_mul(steps)),
        )
    }

    /// Direction and length of a straight orthogonal line from `self` to
    /// `other`. `None` for diagonals and for `self == other`.
    #[must_use]
    pub fn straight_line_to(self, other: Position) -> Option<(Direction, u32)> {
        let length = self.distance(other);
        match (other.x.cmp(&self.x), other.y.cmp(&self.y)) {
            (Ordering::Equal, Ordering::Greater) => Some((Direction::Down, length)),
            (Ordering::Equal, Ordering::Less) => Some((Direction::Up, length)),
            (Ordering::Greater, Ordering::Equal) => Some((Direction::Right, length)),
            (Ordering::Less, Ordering::Equal) => Some((Direction::Left, length)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// Enumeration order used by every legality query.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// Unit offset `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }

    /// Push direction from `pusher` to `target`.
    ///
    /// The axis with the strictly larger displacement wins; equal
    /// displacement resolves along y. `None` only when both tiles coincide.
    #[must_use]
    pub fn away_from(pusher: Position, target: Position) -> Option<Direction> {
        if pusher == target {
            return None;
        }
        if target.x.abs_diff(pusher.x) > target.y.abs_diff(pusher.y) {
            Some(if target.x > pusher.x { Direction::Right } else { Direction::Left })
        } else {
            Some(if target.y > pusher.y { Direction::Down } else { Direction::Up })
        }
    }
}
