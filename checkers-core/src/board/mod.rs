//! Board model
//!
//! The 8x8 grid of cells shared by every task, plus the coordinate type
//! used to address it.

pub mod cell;
pub mod grid;
pub mod position;

pub use cell::{Cell, Rank, Side};
pub use grid::Board;
pub use position::Position;

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 8;
