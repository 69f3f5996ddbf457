//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in checkers-core on top of `embedded-hal` 1.0:
//!
//! - Display drivers (ST7735 128x128 RGB565 over SPI)
//! - Analog joystick (two ADC channels)
//! - Push-button (GPIO input, active-low or active-high)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
