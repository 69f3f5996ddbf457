//! Board-agnostic core logic for the checkers board firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Board model and checkers move rules
//! - Joystick direction sampling
//! - The three state-machine tasks (render, cursor, move manager)
//! - The cooperative tick scheduler that drives them
//! - Peripheral capability traits (display, analog axes, button)
//! - Configuration type definitions and the `game.toml` parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod board;
pub mod config;
pub mod glyph;
pub mod input;
pub mod rules;
pub mod scheduler;
pub mod state;
pub mod tasks;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
