//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic and the
//! peripheral drivers: a pixel display, two analog axes and a button.

pub mod display;
pub mod input;

pub use display::{DisplayDriver, DisplayError, DisplayExt, Rgb565};
pub use input::{AnalogInput, Axis, ButtonInput, InputError};
