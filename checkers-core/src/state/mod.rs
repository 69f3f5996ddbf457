//! Shared game state
//!
//! The single mutable model every task reads and writes. It is owned by
//! whoever drives the scheduler and lent to one task at a time.

pub mod events;
pub mod game;

pub use events::GameEvent;
pub use game::{GameState, Selection, MAX_EVENTS};
