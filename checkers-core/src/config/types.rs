//! Configuration type definitions
//!
//! Defaults reproduce the stock build: 50 ms tick, 500 ms redraw, red and
//! black board with white outlines, permissive drops.

use crate::board::BOARD_SIZE;
use crate::glyph::GLYPH_SIZE;
use crate::input::{JoystickThresholds, AXIS_CENTER, AXIS_FULL_SCALE};
use crate::rules::MovePolicy;
use crate::traits::Rgb565;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period is zero
    ZeroTick,
    /// A task period is zero or not a multiple of the tick period
    PeriodNotMultiple,
    /// Joystick thresholds are not `low < centre < high <= full scale`
    ThresholdOrder,
    /// Cells are too small to hold a piece glyph
    CellTooSmall,
    /// Board does not fit on the panel
    BoardOffScreen,
}

/// Scheduler timing, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Hardware tick; every task period must be a multiple of it
    pub tick_ms: u32,
    /// Board redraw period
    pub render_period_ms: u32,
    /// Joystick sampling period
    pub cursor_period_ms: u32,
    /// Button sampling period
    pub move_period_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            // A full redraw is slow; give it room to finish
            render_period_ms: 500,
            cursor_period_ms: 50,
            move_period_ms: 50,
        }
    }
}

impl TimingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        let periods = [
            self.render_period_ms,
            self.cursor_period_ms,
            self.move_period_ms,
        ];
        if periods.iter().any(|&p| p == 0 || p % self.tick_ms != 0) {
            return Err(ConfigError::PeriodNotMultiple);
        }
        Ok(())
    }
}

/// Joystick configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoystickConfig {
    /// Deadband limits
    pub thresholds: JoystickThresholds,
    /// Mirror the X axis (stick mounted rotated)
    pub invert_x: bool,
    /// Mirror the Y axis
    pub invert_y: bool,
}

/// Move rules configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulesConfig {
    pub move_policy: MovePolicy,
}

/// Colours used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    /// Unplayable squares
    pub square_light: Rgb565,
    /// Playable squares
    pub square_dark: Rgb565,
    pub piece_light: Rgb565,
    pub piece_dark: Rgb565,
    /// Glyph outline and crown
    pub outline: Rgb565,
    /// Cursor frame
    pub cursor: Rgb565,
    /// Frame around the square a held piece came from
    pub selection: Rgb565,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            square_light: Rgb565::RED,
            square_dark: Rgb565::BLACK,
            piece_light: Rgb565::BLACK,
            piece_dark: Rgb565::RED,
            outline: Rgb565::WHITE,
            cursor: Rgb565::WHITE,
            selection: Rgb565::GREEN,
        }
    }
}

/// Where the board sits on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutConfig {
    /// Panel width in pixels
    pub panel_width: u16,
    /// Panel height in pixels
    pub panel_height: u16,
    /// Left edge of the board
    pub origin_x: u16,
    /// Top edge of the board
    pub origin_y: u16,
    /// Side of one square in pixels
    pub cell_size: u16,
    /// Width of cursor and selection frames
    pub frame_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panel_width: 128,
            panel_height: 128,
            origin_x: 0,
            origin_y: 0,
            cell_size: 16,
            frame_width: 2,
        }
    }
}

impl LayoutConfig {
    /// Top-left pixel of the square at (`col`, `row`)
    ///
    /// Saturates at `u16::MAX` for layouts that [`GameConfig::validate`]
    /// would reject.
    pub fn cell_origin(&self, col: u8, row: u8) -> (u16, u16) {
        let offset = |origin: u16, index: u8| {
            origin.saturating_add((index as u16).saturating_mul(self.cell_size))
        };
        (offset(self.origin_x, col), offset(self.origin_y, row))
    }

    /// Offset of a glyph inside its square (centred)
    pub fn glyph_inset(&self) -> u16 {
        self.cell_size.saturating_sub(GLYPH_SIZE as u16) / 2
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if (self.cell_size as usize) < GLYPH_SIZE || self.frame_width as u32 * 2 > self.cell_size as u32 {
            return Err(ConfigError::CellTooSmall);
        }
        let extent = self.cell_size as u32 * BOARD_SIZE as u32;
        if self.origin_x as u32 + extent > self.panel_width as u32
            || self.origin_y as u32 + extent > self.panel_height as u32
        {
            return Err(ConfigError::BoardOffScreen);
        }
        Ok(())
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub timing: TimingConfig,
    pub joystick: JoystickConfig,
    pub rules: RulesConfig,
    pub palette: Palette,
    pub layout: LayoutConfig,
}

impl GameConfig {
    /// Check the configuration for values the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;

        let t = self.joystick.thresholds;
        if !(t.low < AXIS_CENTER && AXIS_CENTER < t.high && t.high < AXIS_FULL_SCALE) {
            return Err(ConfigError::ThresholdOrder);
        }

        self.layout.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_period_must_be_tick_multiple() {
        let mut config = GameConfig::default();
        config.timing.render_period_ms = 520;
        assert_eq!(config.validate(), Err(ConfigError::PeriodNotMultiple));

        config.timing.render_period_ms = 500;
        config.timing.tick_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTick));
    }

    #[test]
    fn test_threshold_order() {
        let mut config = GameConfig::default();
        config.joystick.thresholds = JoystickThresholds { low: 600, high: 700 };
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOrder));
    }

    #[test]
    fn test_layout_limits() {
        let mut config = GameConfig::default();
        config.layout.origin_x = 4;
        assert_eq!(config.validate(), Err(ConfigError::BoardOffScreen));

        config.layout.origin_x = 0;
        config.layout.cell_size = 12;
        assert_eq!(config.validate(), Err(ConfigError::CellTooSmall));
    }

    #[test]
    fn test_cell_geometry() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.cell_origin(3, 2), (48, 32));
        assert_eq!(layout.glyph_inset(), 1);

        let huge = LayoutConfig {
            origin_x: 60_000,
            cell_size: 10_000,
            ..layout
        };
        assert_eq!(huge.cell_origin(7, 1), (u16::MAX, 10_000));
    }
}
