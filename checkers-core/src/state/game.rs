//! Board, cursor, selection and the dirty flag

use heapless::Deque;

use super::events::GameEvent;
use crate::board::{Board, Cell, Position};

/// Capacity of the event log; the oldest event is dropped when full
pub const MAX_EVENTS: usize = 16;

/// Piece-in-hand record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selection {
    /// Nothing selected
    #[default]
    None,
    /// Button went down over this square; pickup completes on release
    Pending(Position),
    /// Piece from this square is in hand
    Held(Position),
}

impl Selection {
    pub fn is_held(&self) -> bool {
        matches!(self, Selection::Held(_))
    }

    /// Square the selection refers to, if any
    pub fn source(&self) -> Option<Position> {
        match *self {
            Selection::None => None,
            Selection::Pending(pos) | Selection::Held(pos) => Some(pos),
        }
    }
}

/// Shared state for all tasks
///
/// Board and selection are changed only by the move manager, the cursor
/// only by the cursor task, and `dirty` is cleared only by the renderer.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    cursor: Position,
    selection: Selection,
    /// Board or cursor changed since the last completed redraw
    dirty: bool,
    events: Deque<GameEvent, MAX_EVENTS>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Power-on state: standard opening, cursor top-left
    pub fn new() -> Self {
        Self::with_board(Board::standard())
    }

    /// Start from an arbitrary board
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            cursor: Position::new(0, 0),
            selection: Selection::None,
            dirty: true,
            events: Deque::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Contents of the square under the cursor
    pub fn cell_under_cursor(&self) -> Cell {
        self.board.get(self.cursor)
    }

    /// Place the cursor; off-board positions are ignored
    pub(crate) fn set_cursor(&mut self, pos: Position) {
        if pos.in_bounds() && pos != self.cursor {
            self.cursor = pos;
            self.dirty = true;
        }
    }

    pub(crate) fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Record an event, dropping the oldest if the log is full
    pub(crate) fn record(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.pop_front();
        }
        // Cannot fail: a slot was freed above
        let _ = self.events.push_back(event);
    }

    /// Take the oldest unread event
    pub fn pop_event(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }
}
