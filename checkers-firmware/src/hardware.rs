//! Board wiring
//!
//! Pin assignment for the RP2040 checkers board:
//!
//! | Function        | Pin    |
//! |-----------------|--------|
//! | TFT SCK (SPI0)  | GPIO18 |
//! | TFT MOSI (SPI0) | GPIO19 |
//! | TFT CS          | GPIO17 |
//! | TFT DC          | GPIO16 |
//! | TFT RST         | GPIO20 |
//! | Joystick X      | GPIO26 |
//! | Joystick Y      | GPIO27 |
//! | Button          | GPIO15 |

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{self, Spi};

use checkers_core::tasks::Peripherals;
use checkers_core::traits::Axis;
use checkers_drivers::display::St7735;
use checkers_drivers::input::{AdcReader, Button, Joystick};

/// RP2040 ADC resolution
pub const ADC_BITS: u8 = 12;

/// SPI clock for the panel
pub const SPI_FREQUENCY_HZ: u32 = 16_000_000;

pub type Display = St7735<
    Spi<'static, SPI0, spi::Blocking>,
    Output<'static>,
    Output<'static>,
    Output<'static>,
>;
pub type Stick = Joystick<StickAdc>;
pub type PushButton = Button<Input<'static>>;
pub type BoardIo = Peripherals<Display, Stick, PushButton>;

/// Joystick potentiometers on two ADC inputs
pub struct StickAdc {
    adc: Adc<'static, Blocking>,
    x: Channel<'static>,
    y: Channel<'static>,
}

impl StickAdc {
    pub fn new(adc: Adc<'static, Blocking>, x: Channel<'static>, y: Channel<'static>) -> Self {
        Self { adc, x, y }
    }
}

impl AdcReader for StickAdc {
    fn read(&mut self, axis: Axis) -> Result<u16, ()> {
        let channel = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        self.adc.blocking_read(channel).map_err(|_| ())
    }
}
