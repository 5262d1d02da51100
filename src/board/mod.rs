//! Linked grid representation of a Connect-Four board

pub mod cell;
pub mod grid;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests;

// Re-exports
pub use cell::{Cell, CellId, Link};
pub use grid::Grid;
pub use snapshot::Snapshot;
pub use state::{BoardState, Prepared};

use serde::{Deserialize, Serialize};

/// Owner of a board slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disc {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Disc {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Disc {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
            Disc::Empty => Disc::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Disc::Empty
    }
}

/// The eight neighbor directions of a cell.
///
/// Row 0 is the bottom of the board, so `Up` increases the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The geometric inverse of this direction
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// Line this direction lies on
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::DownLeft | Direction::UpRight => Axis::Rising,
            Direction::UpLeft | Direction::DownRight => Axis::Falling,
        }
    }

    /// Column/row step, with rows counted from the bottom
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }
}

/// One of the four independent lines through a cell.
///
/// A streak is scanned from each of the axis' two sides in turn, so discs of
/// different owners on either side each get a streak of their own. The
/// declaration order, then primary side before opposite side, is the
/// tie-break order when two streaks score the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right
    Rising,
    /// Top-left to bottom-right
    Falling,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Horizontal, Axis::Vertical, Axis::Rising, Axis::Falling];

    /// Direction walked first when scanning this axis
    #[inline]
    pub const fn primary(self) -> Direction {
        match self {
            Axis::Horizontal => Direction::Left,
            Axis::Vertical => Direction::Down,
            Axis::Rising => Direction::DownLeft,
            Axis::Falling => Direction::UpLeft,
        }
    }

    /// Every start direction in tie-break order
    pub const SCAN_ORDER: [Direction; 8] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
    ];

    /// Both senses of the axis, primary first
    #[inline]
    pub const fn directions(self) -> [Direction; 2] {
        [self.primary(), self.primary().opposite()]
    }
}
