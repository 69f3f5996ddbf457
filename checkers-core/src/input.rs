//! Joystick direction sampling
//!
//! Converts two raw analog axis readings (nominal range 0-1023, centre
//! ~512) into at most one discrete direction.

use crate::traits::{AnalogInput, Axis};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full scale of a normalised axis reading
pub const AXIS_FULL_SCALE: u16 = 1024;

/// Nominal centre of a normalised axis reading
pub const AXIS_CENTER: u16 = AXIS_FULL_SCALE / 2;

/// Discrete joystick direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

/// Deadband limits for an axis
///
/// An axis only registers once it reaches `low` or `high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoystickThresholds {
    pub low: u16,
    pub high: u16,
}

impl Default for JoystickThresholds {
    fn default() -> Self {
        Self {
            low: 256,
            high: 768,
        }
    }
}

impl Direction {
    /// Classify a pair of axis readings
    ///
    /// Checked in fixed order: down, up, left, right. A candidate wins only
    /// if it passes the deadband and its deviation from centre dominates the
    /// other axis, comparing `value` against `1024 - value`.
    pub fn classify(x: u16, y: u16, thresholds: JoystickThresholds) -> Self {
        let x = x.min(AXIS_FULL_SCALE - 1);
        let y = y.min(AXIS_FULL_SCALE - 1);
        let mirror = |v: u16| AXIS_FULL_SCALE - v;

        if y >= thresholds.high && y >= x && y >= mirror(x) {
            Direction::Down
        } else if y <= thresholds.low && y <= x && y <= mirror(x) {
            Direction::Up
        } else if x <= thresholds.low && x < y && x < mirror(y) {
            Direction::Left
        } else if x >= thresholds.high && x > y && x > mirror(y) {
            Direction::Right
        } else {
            Direction::None
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Direction::None)
    }
}

/// Read both axes and classify them
///
/// A failed read on either axis yields [`Direction::None`].
pub fn sample<A: AnalogInput>(analog: &mut A, thresholds: JoystickThresholds) -> Direction {
    match (analog.read_axis(Axis::X), analog.read_axis(Axis::Y)) {
        (Ok(x), Ok(y)) => Direction::classify(x, y, thresholds),
        _ => Direction::None,
    }
}
