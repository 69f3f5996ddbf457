//! Embassy async tasks
//!
//! The game itself runs inside a single task; the scheduler in
//! checkers-core multiplexes the state machines on its tick.

pub mod tick;

pub use tick::tick_task;
