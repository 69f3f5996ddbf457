//! Observable game events
//!
//! Tasks record what they did so the firmware can log it. Nothing in the
//! game logic reads these back.

use crate::board::{Position, Side};
use crate::traits::DisplayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameEvent {
    /// Cursor stepped to a new square
    CursorMoved(Position),
    /// Piece lifted from a square
    PickedUp(Position),
    /// Held piece put back without moving
    Deselected(Position),
    /// Piece moved
    Dropped { from: Position, to: Position },
    /// Drop target refused (occupied, or illegal under the strict policy)
    DropRejected { from: Position, to: Position },
    /// Board redrawn
    Rendered,
    /// Redraw aborted; it will be retried
    RenderFailed(DisplayError),
    /// One side has no pieces left
    Winner(Side),
}
