//! Push-button input
//!
//! A single GPIO with either polarity. The board wires the button to
//! ground with a pull-up, so the stock configuration is active-low.

use checkers_core::traits::ButtonInput;
use embedded_hal::digital::InputPin;

/// GPIO push-button
pub struct Button<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> Button<P> {
    /// Create a new button
    ///
    /// # Arguments
    /// - `pin`: The GPIO input to sample
    /// - `active_low`: If true, the button reads LOW while pressed
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Button that pulls the pin to ground when pressed
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Button that drives the pin high when pressed
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }
}

impl<P: InputPin> ButtonInput for Button<P> {
    fn is_pressed(&mut self) -> bool {
        let level = if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        };
        // A pin that cannot be read counts as released
        level.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    #[derive(Debug)]
    struct PinFault;

    impl embedded_hal::digital::Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Mock GPIO input for testing
    struct MockPin {
        high: bool,
        fail: bool,
    }

    impl MockPin {
        fn new(high: bool) -> Self {
            Self { high, fail: false }
        }
    }

    impl ErrorType for MockPin {
        type Error = PinFault;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, PinFault> {
            if self.fail {
                return Err(PinFault);
            }
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, PinFault> {
            self.is_high().map(|high| !high)
        }
    }

    #[test]
    fn test_active_low_button() {
        let mut button = Button::new_active_low(MockPin::new(true));
        assert!(!button.is_pressed());

        button.pin.high = false;
        assert!(button.is_pressed());
    }

    #[test]
    fn test_active_high_button() {
        let mut button = Button::new_active_high(MockPin::new(false));
        assert!(!button.is_pressed());

        button.pin.high = true;
        assert!(button.is_pressed());
    }

    #[test]
    fn test_read_error_is_released() {
        let mut pin = MockPin::new(false);
        pin.fail = true;
        let mut button = Button::new_active_low(pin);
        assert!(!button.is_pressed());
    }
}
