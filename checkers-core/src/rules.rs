//! Checkers move rules
//!
//! Pure functions over a [`Board`]: simple diagonal steps only. Jumps,
//! captures and promotion are not part of this rule set.

use crate::board::{Board, Position, Rank, Side};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the move manager treats a drop on an empty square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MovePolicy {
    /// Any empty square is accepted
    #[default]
    Permissive,
    /// The drop must also pass [`is_move_valid`]
    Strict,
}

impl MovePolicy {
    /// Decide whether a drop from `from` onto `to` is accepted
    pub fn accepts(self, board: &Board, from: Position, to: Position) -> bool {
        match self {
            MovePolicy::Permissive => {
                to.in_bounds() && board.get(from).is_occupied() && board.get(to).is_empty()
            }
            MovePolicy::Strict => is_move_valid(board, from, to),
        }
    }
}

/// Check whether moving the piece on `from` to `to` is a legal simple move
///
/// Fails closed: off-board coordinates, an empty `from` or an occupied
/// `to` all yield `false`. A man steps one square diagonally toward its
/// side's forward row; a king steps one square diagonally either way.
pub fn is_move_valid(board: &Board, from: Position, to: Position) -> bool {
    if !from.in_bounds() || !to.in_bounds() {
        return false;
    }

    let piece = board.get(from);
    let (Some(side), Some(rank)) = (piece.side(), piece.rank()) else {
        return false;
    };

    if board.get(to).is_occupied() {
        return false;
    }

    let (dcol, drow) = from.delta(to);
    if dcol.abs() != 1 {
        return false;
    }

    match rank {
        Rank::King => drow.abs() == 1,
        Rank::Man => drow == side.forward(),
    }
}

/// Check whether `side` still owns at least one man or king
pub fn has_any_piece(board: &Board, side: Side) -> bool {
    board.pieces().any(|(_, cell)| cell.belongs_to(side))
}

/// The side that has won, if the other side has run out of pieces
pub fn winner(board: &Board) -> Option<Side> {
    [Side::Light, Side::Dark]
        .into_iter()
        .find(|side| !has_any_piece(board, side.opponent()) && has_any_piece(board, *side))
}
