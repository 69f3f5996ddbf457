//! Analog joystick
//!
//! Two potentiometers read through an ADC. Raw conversions are scaled to
//! the 10-bit range the direction sampler works in, and either axis can be
//! mirrored to match how the stick is mounted.

use checkers_core::traits::{AnalogInput, Axis, InputError};

/// Output resolution of [`Joystick::read_axis`]
const OUTPUT_BITS: u8 = 10;
const OUTPUT_MAX: u16 = (1 << OUTPUT_BITS) - 1;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read the raw conversion for one axis
    #[allow(clippy::result_unit_err)]
    fn read(&mut self, axis: Axis) -> Result<u16, ()>;
}

/// Two-axis analog joystick
pub struct Joystick<ADC> {
    adc: ADC,
    /// Converter resolution in bits (RP2040: 12)
    adc_bits: u8,
    invert_x: bool,
    invert_y: bool,
}

impl<ADC> Joystick<ADC> {
    /// Create a joystick on a converter with `adc_bits` of resolution
    pub fn new(adc: ADC, adc_bits: u8) -> Self {
        Self {
            adc,
            adc_bits,
            invert_x: false,
            invert_y: false,
        }
    }

    /// Mirror one or both axes
    pub fn with_inversion(mut self, invert_x: bool, invert_y: bool) -> Self {
        self.invert_x = invert_x;
        self.invert_y = invert_y;
        self
    }

    /// Scale a raw conversion to 10 bits
    fn normalise(&self, raw: u16) -> u16 {
        let raw = raw as u32;
        let scaled = if self.adc_bits >= OUTPUT_BITS {
            raw >> (self.adc_bits - OUTPUT_BITS)
        } else {
            raw << (OUTPUT_BITS - self.adc_bits)
        };
        scaled.min(OUTPUT_MAX as u32) as u16
    }
}

impl<ADC: AdcReader> AnalogInput for Joystick<ADC> {
    fn read_axis(&mut self, axis: Axis) -> Result<u16, InputError> {
        let raw = self.adc.read(axis).map_err(|_| InputError::Conversion)?;
        let value = self.normalise(raw);

        let invert = match axis {
            Axis::X => self.invert_x,
            Axis::Y => self.invert_y,
        };
        Ok(if invert { OUTPUT_MAX - value } else { value })
    }
}
