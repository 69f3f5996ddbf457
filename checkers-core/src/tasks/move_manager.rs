//! Move-manager task
//!
//! Drives pickup and drop from the push-button. Every action happens on a
//! button edge and the task then waits for the opposite edge, so contact
//! bounce within one level never repeats an action.
//!
//! | State   | Button   | Condition                | Action                      | Next    |
//! |---------|----------|--------------------------|-----------------------------|---------|
//! | Wait    | pressed  | cursor over a piece      | selection = Pending(cursor) | Pressed |
//! | Pressed | released | selection Pending(src)   | selection = Held(src)       | Moving  |
//! | Pressed | released | selection Held           | keep the piece in hand      | Moving  |
//! | Pressed | released | no selection             |                             | Wait    |
//! | Moving  | pressed  | cursor on the source     | put the piece back          | Pressed |
//! | Moving  | pressed  | policy accepts the drop  | relocate the piece          | Pressed |
//! | Moving  | pressed  | otherwise                | drop rejected, keep holding | Pressed |
//!
//! Any other combination stays in the current state.

use super::{Task, TaskContext};
use crate::board::Position;
use crate::rules::{self, MovePolicy};
use crate::state::{GameEvent, GameState, Selection};
use crate::traits::{AnalogInput, ButtonInput, DisplayDriver};

/// Move-manager states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveState {
    /// Nothing in hand, waiting for a press over a piece
    Wait,
    /// Button is down, waiting for release
    Pressed,
    /// Piece in hand, waiting for a press over the destination
    Moving,
}

/// Button-driven pickup and drop
#[derive(Debug, Clone)]
pub struct MoveManager {
    policy: MovePolicy,
}

impl MoveManager {
    pub fn new(policy: MovePolicy) -> Self {
        Self { policy }
    }

    /// Button went down while a piece from `from` is in hand
    fn drop_piece(&self, game: &mut GameState, from: Position) {
        let to = game.cursor();

        if to == from {
            game.set_selection(Selection::None);
            game.record(GameEvent::Deselected(from));
            game.mark_dirty();
            return;
        }

        if self.policy.accepts(game.board(), from, to) && game.board_mut().relocate(from, to) {
            game.set_selection(Selection::None);
            game.record(GameEvent::Dropped { from, to });
            game.mark_dirty();
            if let Some(side) = rules::winner(game.board()) {
                game.record(GameEvent::Winner(side));
            }
        } else {
            game.record(GameEvent::DropRejected { from, to });
        }
    }
}

impl Task for MoveManager {
    type State = MoveState;

    const NAME: &'static str = "move";

    fn initial_state(&self) -> MoveState {
        MoveState::Wait
    }

    fn advance<D, J, B>(&self, state: MoveState, cx: &mut TaskContext<'_, D, J, B>) -> MoveState
    where
        D: DisplayDriver,
        J: AnalogInput,
        B: ButtonInput,
    {
        let pressed = cx.io.button.is_pressed();
        let game = &mut *cx.game;

        match (state, pressed) {
            (MoveState::Wait, false) => MoveState::Wait,
            (MoveState::Wait, true) => {
                if game.cell_under_cursor().is_occupied() {
                    game.set_selection(Selection::Pending(game.cursor()));
                    MoveState::Pressed
                } else {
                    MoveState::Wait
                }
            }

            (MoveState::Pressed, true) => MoveState::Pressed,
            (MoveState::Pressed, false) => match game.selection() {
                Selection::Pending(source) => {
                    game.set_selection(Selection::Held(source));
                    game.record(GameEvent::PickedUp(source));
                    game.mark_dirty();
                    MoveState::Moving
                }
                Selection::Held(_) => MoveState::Moving,
                Selection::None => MoveState::Wait,
            },

            (MoveState::Moving, false) => MoveState::Moving,
            (MoveState::Moving, true) => {
                match game.selection().source() {
                    Some(from) => self.drop_piece(game, from),
                    // Selection can only be cleared from this task
                    None => return MoveState::Wait,
                }
                MoveState::Pressed
            }
        }
    }
}
