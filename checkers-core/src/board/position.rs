//! Board coordinates

use super::BOARD_SIZE;
use crate::input::Direction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square on the board
///
/// Fields are public so callers can express off-board squares; every
/// board-affecting operation checks [`Position::in_bounds`] and fails
/// closed when it is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Column, 0 = left edge
    pub col: u8,
    /// Row, 0 = top edge
    pub row: u8,
}

impl Position {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    pub const fn in_bounds(self) -> bool {
        (self.col as usize) < BOARD_SIZE && (self.row as usize) < BOARD_SIZE
    }

    /// Playable (dark) squares have an even coordinate sum
    pub const fn is_playable(self) -> bool {
        (self.col ^ self.row) & 1 == 0
    }

    /// One step in `direction`, clamped at the board edges
    ///
    /// A step that would leave the board returns `self` unchanged.
    pub fn step(self, direction: Direction) -> Self {
        let last = (BOARD_SIZE - 1) as u8;
        match direction {
            Direction::None => self,
            Direction::Left if self.col > 0 => Self::new(self.col - 1, self.row),
            Direction::Right if self.col < last => Self::new(self.col + 1, self.row),
            Direction::Up if self.row > 0 => Self::new(self.col, self.row - 1),
            Direction::Down if self.row < last => Self::new(self.col, self.row + 1),
            _ => self,
        }
    }

    /// Signed column and row deltas from `self` to `other`
    pub fn delta(self, other: Position) -> (i8, i8) {
        (
            (other.col as i16 - self.col as i16) as i8,
            (other.row as i16 - self.row as i16) as i8,
        )
    }
}
