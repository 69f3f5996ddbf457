//! Checkers - handheld checkers board firmware
//!
//! Main firmware binary for the RP2040 checkers board: an 8x8 board on a
//! 128x128 TFT, a two-axis joystick to move the cursor and a button to
//! pick up and drop pieces.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use checkers_core::scheduler::Scheduler;
use checkers_core::state::GameState;
use checkers_core::tasks::Peripherals;
use checkers_core::traits::Rgb565;
use checkers_drivers::display::St7735;
use checkers_drivers::input::{Button, Joystick};

use crate::config::load_config;
use crate::hardware::{StickAdc, ADC_BITS, SPI_FREQUENCY_HZ};

mod config;
mod hardware;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Checkers firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Display on SPI0, transmit only
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let dc = Output::new(p.PIN_16, Level::Low);
    let cs = Output::new(p.PIN_17, Level::High);
    let rst = Output::new(p.PIN_20, Level::High);

    let mut display = St7735::new(spi, dc, cs, rst);
    // On failure keep going: every redraw fails and is retried, and the log says why
    match display.init(&mut Delay).and_then(|()| display.clear(Rgb565::BLACK)) {
        Ok(()) => info!("Display initialized"),
        Err(e) => error!("Display init failed: {:?}", e),
    }

    // Joystick on ADC0/ADC1
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let x = Channel::new_pin(p.PIN_26, Pull::None);
    let y = Channel::new_pin(p.PIN_27, Pull::None);
    let joystick = Joystick::new(StickAdc::new(adc, x, y), ADC_BITS)
        .with_inversion(config.joystick.invert_x, config.joystick.invert_y);
    info!("Joystick initialized");

    // Button to ground, internal pull-up
    let button = Button::new_active_low(Input::new(p.PIN_15, Pull::Up));

    let scheduler = match Scheduler::from_config(&config) {
        Ok(scheduler) => scheduler,
        Err(e) => {
            // load_config validated the timing, so this is a bug
            defmt::panic!("Scheduler rejected validated config: {:?}", e);
        }
    };

    let io = Peripherals::new(display, joystick, button);
    spawner.spawn(tasks::tick_task(scheduler, GameState::new(), io)).unwrap();

    info!("Game running");
}
