//! Cell contents

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Starts on rows 5-7, moves toward row 0
    Light,
    /// Starts on rows 0-2, moves toward row 7
    Dark,
}

impl Side {
    /// The other player
    pub const fn opponent(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Row delta of a forward step for a man of this side
    pub const fn forward(self) -> i8 {
        match self {
            Side::Light => -1,
            Side::Dark => 1,
        }
    }
}

/// Piece rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    Man,
    King,
}

/// Contents of a single board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    ManLight,
    ManDark,
    KingLight,
    KingDark,
}

impl Cell {
    /// Build the cell holding a piece of the given side and rank
    pub const fn piece(side: Side, rank: Rank) -> Self {
        match (side, rank) {
            (Side::Light, Rank::Man) => Cell::ManLight,
            (Side::Dark, Rank::Man) => Cell::ManDark,
            (Side::Light, Rank::King) => Cell::KingLight,
            (Side::Dark, Rank::King) => Cell::KingDark,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub const fn is_occupied(self) -> bool {
        !self.is_empty()
    }

    /// Owner of the piece, if any
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::ManLight | Cell::KingLight => Some(Side::Light),
            Cell::ManDark | Cell::KingDark => Some(Side::Dark),
        }
    }

    /// Rank of the piece, if any
    pub const fn rank(self) -> Option<Rank> {
        match self {
            Cell::Empty => None,
            Cell::ManLight | Cell::ManDark => Some(Rank::Man),
            Cell::KingLight | Cell::KingDark => Some(Rank::King),
        }
    }

    /// Check if this cell holds a piece belonging to `side`
    pub fn belongs_to(self, side: Side) -> bool {
        self.side() == Some(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_round_trips_side_and_rank() {
        for side in [Side::Light, Side::Dark] {
            for rank in [Rank::Man, Rank::King] {
                let cell = Cell::piece(side, rank);
                assert_eq!(cell.side(), Some(side));
                assert_eq!(cell.rank(), Some(rank));
                assert!(cell.is_occupied());
            }
        }
    }

    #[test]
    fn test_empty_cell() {
        assert!(Cell::Empty.is_empty());
        assert_eq!(Cell::Empty.side(), None);
        assert_eq!(Cell::Empty.rank(), None);
        assert!(!Cell::Empty.belongs_to(Side::Dark));
    }

    #[test]
    fn test_forward_directions_oppose() {
        assert_eq!(Side::Dark.forward(), -Side::Light.forward());
        assert_eq!(Side::Dark.opponent(), Side::Light);
    }
}
