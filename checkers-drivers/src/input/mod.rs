//! Input drivers

pub mod button;
pub mod joystick;

pub use button::Button;
pub use joystick::{AdcReader, Joystick};
