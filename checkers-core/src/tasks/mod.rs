//! Cooperative state-machine tasks
//!
//! Each task is a synchronous state machine advanced once per period by
//! the [`Scheduler`](crate::scheduler::Scheduler). Tasks never talk to
//! each other directly; they share [`GameState`] and its dirty flag.

pub mod cursor;
pub mod move_manager;
pub mod render;

pub use cursor::{CursorState, CursorTask};
pub use move_manager::{MoveManager, MoveState};
pub use render::{RenderState, RenderTask};

use crate::config::GameConfig;
use crate::state::GameState;
use crate::traits::{AnalogInput, ButtonInput, DisplayDriver};

/// The peripherals the tasks drive
pub struct Peripherals<D, J, B> {
    pub display: D,
    pub joystick: J,
    pub button: B,
}

impl<D, J, B> Peripherals<D, J, B> {
    pub fn new(display: D, joystick: J, button: B) -> Self {
        Self {
            display,
            joystick,
            button,
        }
    }
}

/// Everything a task may touch during one advance
pub struct TaskContext<'a, D, J, B> {
    pub game: &'a mut GameState,
    pub io: &'a mut Peripherals<D, J, B>,
}

/// A state machine driven by the scheduler
pub trait Task {
    /// FSM state carried between ticks
    type State: Copy + PartialEq + core::fmt::Debug;

    /// Short name for logs
    const NAME: &'static str;

    /// State at power-on
    fn initial_state(&self) -> Self::State;

    /// Run one tick: read inputs, act, and return the next state
    fn advance<D, J, B>(&self, state: Self::State, cx: &mut TaskContext<'_, D, J, B>) -> Self::State
    where
        D: DisplayDriver,
        J: AnalogInput,
        B: ButtonInput;
}

/// Snapshot of a machine's current state, for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MachineState {
    Render(RenderState),
    Cursor(CursorState),
    MoveManager(MoveState),
}

/// A task together with its current state
///
/// Gives the scheduler a single concrete type for every task it holds.
#[derive(Debug, Clone)]
pub enum Machine {
    Render(RenderTask, RenderState),
    Cursor(CursorTask, CursorState),
    MoveManager(MoveManager, MoveState),
}

impl Machine {
    pub fn render(task: RenderTask) -> Self {
        let state = task.initial_state();
        Machine::Render(task, state)
    }

    pub fn cursor(task: CursorTask) -> Self {
        let state = task.initial_state();
        Machine::Cursor(task, state)
    }

    pub fn move_manager(task: MoveManager) -> Self {
        let state = task.initial_state();
        Machine::MoveManager(task, state)
    }

    /// The three game machines in dispatch order, built from `config`
    pub fn from_config(config: &GameConfig) -> [(u32, Machine); 3] {
        let timing = &config.timing;
        [
            (
                timing.render_period_ms,
                Machine::render(RenderTask::new(config.palette, config.layout)),
            ),
            (
                timing.cursor_period_ms,
                Machine::cursor(CursorTask::new(config.joystick.thresholds)),
            ),
            (
                timing.move_period_ms,
                Machine::move_manager(MoveManager::new(config.rules.move_policy)),
            ),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Machine::Render(..) => RenderTask::NAME,
            Machine::Cursor(..) => CursorTask::NAME,
            Machine::MoveManager(..) => MoveManager::NAME,
        }
    }

    pub fn state(&self) -> MachineState {
        match self {
            Machine::Render(_, s) => MachineState::Render(*s),
            Machine::Cursor(_, s) => MachineState::Cursor(*s),
            Machine::MoveManager(_, s) => MachineState::MoveManager(*s),
        }
    }

    /// Advance the wrapped task by one tick
    pub fn advance<D, J, B>(&mut self, cx: &mut TaskContext<'_, D, J, B>)
    where
        D: DisplayDriver,
        J: AnalogInput,
        B: ButtonInput,
    {
        match self {
            Machine::Render(task, state) => *state = task.advance(*state, cx),
            Machine::Cursor(task, state) => *state = task.advance(*state, cx),
            Machine::MoveManager(task, state) => *state = task.advance(*state, cx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machines_start_in_initial_state() {
        let machines = Machine::from_config(&GameConfig::default());
        let names: [&str; 3] = [
            machines[0].1.name(),
            machines[1].1.name(),
            machines[2].1.name(),
        ];
        assert_eq!(names, ["render", "cursor", "move"]);

        assert_eq!(machines[0].0, 500);
        assert_eq!(machines[1].1.state(), MachineState::Cursor(CursorState::Neutral));
        assert_eq!(machines[2].1.state(), MachineState::MoveManager(MoveState::Wait));
    }
}
