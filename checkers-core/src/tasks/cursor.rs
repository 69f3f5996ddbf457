//! Cursor task
//!
//! Turns joystick deflections into single-square cursor steps. Movement
//! happens only on the Neutral -> Directed edge, so holding the stick
//! produces one step, not one per tick.

use super::{Task, TaskContext};
use crate::input::{self, JoystickThresholds};
use crate::state::GameEvent;
use crate::traits::{AnalogInput, ButtonInput, DisplayDriver};

/// Cursor task states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorState {
    /// Stick centred; the next deflection moves the cursor
    Neutral,
    /// Stick deflected; waiting for it to return to centre
    Directed,
}

/// Joystick-driven cursor
#[derive(Debug, Clone)]
pub struct CursorTask {
    thresholds: JoystickThresholds,
}

impl CursorTask {
    pub fn new(thresholds: JoystickThresholds) -> Self {
        Self { thresholds }
    }
}

impl Task for CursorTask {
    type State = CursorState;

    const NAME: &'static str = "cursor";

    fn initial_state(&self) -> CursorState {
        CursorState::Neutral
    }

    fn advance<D, J, B>(&self, state: CursorState, cx: &mut TaskContext<'_, D, J, B>) -> CursorState
    where
        D: DisplayDriver,
        J: AnalogInput,
        B: ButtonInput,
    {
        let direction = input::sample(&mut cx.io.joystick, self.thresholds);

        match state {
            CursorState::Neutral if direction.is_none() => CursorState::Neutral,
            CursorState::Neutral => {
                let game = &mut *cx.game;
                let from = game.cursor();
                let to = from.step(direction);
                if to != from {
                    game.set_cursor(to);
                    game.record(GameEvent::CursorMoved(to));
                }
                game.mark_dirty();
                CursorState::Directed
            }
            CursorState::Directed if direction.is_none() => CursorState::Neutral,
            CursorState::Directed => CursorState::Directed,
        }
    }
}
