//! Fixed-period round-robin dispatcher
//!
//! Each slot accumulates elapsed time one tick at a time. When it reaches
//! the slot's period the task advances once and the accumulator resets.
//! Ticks are never queued: a caller that falls behind simply calls
//! [`Scheduler::tick`] fewer times.

use heapless::Vec;

use crate::config::{ConfigError, GameConfig};
use crate::state::GameState;
use crate::tasks::{Machine, MachineState, Peripherals, TaskContext};
use crate::traits::{AnalogInput, ButtonInput, DisplayDriver};

/// Maximum number of scheduled tasks
pub const MAX_TASKS: usize = 4;

/// Scheduler construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerError {
    /// Tick period is zero
    ZeroTick,
    /// Task period is zero or not a whole number of ticks
    PeriodNotMultiple,
    /// All task slots are taken
    TooManyTasks,
    /// Configuration failed [`GameConfig::validate`]
    InvalidConfig(ConfigError),
}

impl From<ConfigError> for SchedulerError {
    fn from(e: ConfigError) -> Self {
        SchedulerError::InvalidConfig(e)
    }
}

/// What happened during one [`Scheduler::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Tick number, starting at 1
    pub tick: u32,
    /// Bit `i` is set if slot `i` ran
    pub ran: u8,
}

impl TickReport {
    /// Check whether the task in slot `index` ran this tick
    pub fn ran(&self, index: usize) -> bool {
        index < MAX_TASKS && self.ran & (1 << index) != 0
    }

    /// Number of tasks that ran this tick
    pub fn count(&self) -> u32 {
        self.ran.count_ones()
    }
}

/// Task descriptor
#[derive(Debug, Clone)]
struct TaskSlot {
    period_ms: u32,
    elapsed_ms: u32,
    machine: Machine,
}

/// Tick-driven task scheduler
#[derive(Debug, Clone)]
pub struct Scheduler {
    tick_ms: u32,
    ticks: u32,
    slots: Vec<TaskSlot, MAX_TASKS>,
}

impl Scheduler {
    /// Create an empty scheduler ticking every `tick_ms`
    pub fn new(tick_ms: u32) -> Result<Self, SchedulerError> {
        if tick_ms == 0 {
            return Err(SchedulerError::ZeroTick);
        }
        Ok(Self {
            tick_ms,
            ticks: 0,
            slots: Vec::new(),
        })
    }

    /// Build the game's render, cursor and move-manager tasks, in that order
    ///
    /// The whole configuration is validated first, layout included.
    pub fn from_config(config: &GameConfig) -> Result<Self, SchedulerError> {
        config.validate()?;
        let mut scheduler = Self::new(config.timing.tick_ms)?;
        for (period_ms, machine) in Machine::from_config(config) {
            scheduler.add(period_ms, machine)?;
        }
        Ok(scheduler)
    }

    /// Append a task; tasks run in the order they were added
    ///
    /// A new task runs on the first tick after it is added.
    pub fn add(&mut self, period_ms: u32, machine: Machine) -> Result<(), SchedulerError> {
        if period_ms == 0 || period_ms % self.tick_ms != 0 {
            return Err(SchedulerError::PeriodNotMultiple);
        }
        self.slots
            .push(TaskSlot {
                period_ms,
                elapsed_ms: period_ms - self.tick_ms,
                machine,
            })
            .map_err(|_| SchedulerError::TooManyTasks)
    }

    /// Advance every task whose period has elapsed
    ///
    /// Call once per tick period. Tasks see each other's changes to `game`
    /// within the same pass, in slot order.
    pub fn tick<D, J, B>(
        &mut self,
        game: &mut GameState,
        io: &mut Peripherals<D, J, B>,
    ) -> TickReport
    where
        D: DisplayDriver,
        J: AnalogInput,
        B: ButtonInput,
    {
        self.ticks = self.ticks.wrapping_add(1);
        let mut ran = 0u8;

        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.elapsed_ms += self.tick_ms;
            if slot.elapsed_ms >= slot.period_ms {
                let mut cx = TaskContext {
                    game: &mut *game,
                    io: &mut *io,
                };
                slot.machine.advance(&mut cx);
                slot.elapsed_ms = 0;
                ran |= 1 << index;
            }
        }

        TickReport {
            tick: self.ticks,
            ran,
        }
    }

    /// Ticks processed so far
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Name, period and current state of each task, in run order
    pub fn tasks(&self) -> impl Iterator<Item = (&'static str, u32, MachineState)> + '_ {
        self.slots
            .iter()
            .map(|slot| (slot.machine.name(), slot.period_ms, slot.machine.state()))
    }
}
