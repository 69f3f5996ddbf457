//! Cooperative tick scheduler
//!
//! Runs the game's state machines from a single periodic tick. Tasks run
//! to completion in a fixed order and never preempt one another.

pub mod executor;

pub use executor::{Scheduler, SchedulerError, TickReport, MAX_TASKS};
