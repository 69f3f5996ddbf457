//! Input device traits

/// Errors from reading an input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// ADC conversion failed or timed out
    Conversion,
}

/// Joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Horizontal; larger values point right
    X,
    /// Vertical; larger values point down
    Y,
}

/// Two-channel analog input
///
/// Readings are normalised to 10 bits (0-1023, centre ~512) whatever the
/// resolution of the underlying converter.
pub trait AnalogInput {
    fn read_axis(&mut self, axis: Axis) -> Result<u16, InputError>;
}

/// Single push button
pub trait ButtonInput {
    /// Check if the button is held down
    ///
    /// Electrical polarity (active-low wiring) is resolved by the
    /// implementation.
    fn is_pressed(&mut self) -> bool;
}
