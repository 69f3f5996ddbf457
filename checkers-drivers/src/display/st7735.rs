//! ST7735 TFT display driver
//!
//! Driver for 128x128 ST7735-based RGB565 panels over a 4-wire SPI bus
//! (SCK/MOSI plus separate chip-select and data/command lines). Drawing
//! is unbuffered: every rectangle is streamed straight into panel RAM.

use checkers_core::traits::{DisplayDriver, DisplayError, Rgb565};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Panel dimensions
pub const WIDTH: u16 = 128;
pub const HEIGHT: u16 = 128;

/// Pixels sent per SPI transfer while filling
const CHUNK_PIXELS: usize = 32;

/// ST7735 commands
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// COLMOD argument: 16 bits per pixel
const COLMOD_RGB565: u8 = 0x05;
/// MADCTL argument: mirrored rows and columns, RGB order
const MADCTL_DEFAULT: u8 = 0xC0;

/// ST7735 SPI driver
pub struct St7735<SPI, DC, CS, RST> {
    spi: SPI,
    /// Data/command select (low = command)
    dc: DC,
    /// Chip select, active low
    cs: CS,
    /// Hardware reset, active low
    rst: RST,
}

impl<SPI, DC, CS, RST> St7735<SPI, DC, CS, RST>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    /// Create a new driver; call [`St7735::init`] before drawing
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Reset and configure the panel
    ///
    /// Blocks for roughly a second on the supplied delay.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DisplayError> {
        self.cs.set_high().map_err(|_| DisplayError::Pin)?;

        // Hardware reset
        self.rst.set_low().map_err(|_| DisplayError::Pin)?;
        delay.delay_ms(100);
        self.rst.set_high().map_err(|_| DisplayError::Pin)?;
        delay.delay_ms(100);

        self.command(cmd::SWRESET, &[])?;
        delay.delay_ms(150);

        self.command(cmd::SLPOUT, &[])?;
        delay.delay_ms(500);

        self.command(cmd::COLMOD, &[COLMOD_RGB565])?;
        delay.delay_ms(10);

        self.command(cmd::MADCTL, &[MADCTL_DEFAULT])?;

        self.command(cmd::DISPON, &[])?;
        delay.delay_ms(100);

        Ok(())
    }

    /// Fill the whole panel with one colour
    pub fn clear(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        self.draw_rect(0, 0, WIDTH, HEIGHT, color)
    }

    /// Send a command byte followed by its parameters
    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::Pin)?;
        let result = self.command_selected(command, params);
        // Always deselect, even after a bus error
        self.cs.set_high().map_err(|_| DisplayError::Pin)?;
        result
    }

    fn command_selected(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Pin)?;
        self.write(&[command])?;
        if !params.is_empty() {
            self.dc.set_high().map_err(|_| DisplayError::Pin)?;
            self.write(params)?;
        }
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.spi.write(bytes).map_err(|_| DisplayError::Bus)?;
        self.spi.flush().map_err(|_| DisplayError::Bus)
    }

    /// Select the inclusive pixel window that RAMWR fills
    fn set_address_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        self.command(cmd::CASET, &[x0h, x0l, x1h, x1l])?;

        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.command(cmd::RASET, &[y0h, y0l, y1h, y1l])
    }

    /// Stream `count` copies of `color` after RAMWR
    fn fill_pixels(&mut self, count: u32, color: Rgb565) -> Result<(), DisplayError> {
        let mut chunk = [0u8; CHUNK_PIXELS * 2];
        for pixel in chunk.chunks_exact_mut(2) {
            pixel.copy_from_slice(&color.to_be_bytes());
        }

        self.cs.set_low().map_err(|_| DisplayError::Pin)?;
        let result = self.stream_selected(count, &chunk);
        self.cs.set_high().map_err(|_| DisplayError::Pin)?;
        result
    }

    fn stream_selected(&mut self, count: u32, chunk: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Pin)?;
        self.write(&[cmd::RAMWR])?;
        self.dc.set_high().map_err(|_| DisplayError::Pin)?;

        let mut remaining = count as usize;
        while remaining > 0 {
            let n = remaining.min(CHUNK_PIXELS);
            self.write(&chunk[..n * 2])?;
            remaining -= n;
        }
        Ok(())
    }
}

impl<SPI, DC, CS, RST> DisplayDriver for St7735<SPI, DC, CS, RST>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb565) -> Result<(), DisplayError> {
        if x >= WIDTH || y >= HEIGHT || w == 0 || h == 0 {
            return Ok(());
        }
        // Clip to the panel
        let w = w.min(WIDTH - x);
        let h = h.min(HEIGHT - y);

        self.set_address_window(x, y, x + w - 1, y + h - 1)?;
        self.fill_pixels(w as u32 * h as u32, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::{ErrorKind, ErrorType as SpiErrorType};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Everything the panel saw, in order
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Wire {
        Command(u8),
        Data(u8),
        Select(bool),
        Reset(bool),
    }

    #[derive(Default)]
    struct Bus {
        log: Vec<Wire>,
        dc_high: bool,
        fail_spi: bool,
    }

    type Shared = Rc<RefCell<Bus>>;

    #[derive(Debug)]
    struct SpiFault;

    impl embedded_hal::spi::Error for SpiFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct MockSpi(Shared);

    impl SpiErrorType for MockSpi {
        type Error = SpiFault;
    }

    impl SpiBus<u8> for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), SpiFault> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), SpiFault> {
            let mut bus = self.0.borrow_mut();
            if bus.fail_spi {
                return Err(SpiFault);
            }
            let data = bus.dc_high;
            for &b in words {
                bus.log.push(if data { Wire::Data(b) } else { Wire::Command(b) });
            }
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), SpiFault> {
            self.write(write)
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), SpiFault> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), SpiFault> {
            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum Role {
        Dc,
        Cs,
        Rst,
    }

    struct MockPin(Shared, Role);

    impl PinErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.set(true);
            Ok(())
        }
    }

    impl MockPin {
        fn set(&mut self, high: bool) {
            let mut bus = self.0.borrow_mut();
            match self.1 {
                Role::Dc => bus.dc_high = high,
                Role::Cs => bus.log.push(Wire::Select(!high)),
                Role::Rst => bus.log.push(Wire::Reset(!high)),
            }
        }
    }

    struct NoDelay {
        total_ms: u32,
    }

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ms += ns / 1_000_000;
        }
    }

    fn panel() -> (St7735<MockSpi, MockPin, MockPin, MockPin>, Shared) {
        let bus: Shared = Rc::default();
        let panel = St7735::new(
            MockSpi(bus.clone()),
            MockPin(bus.clone(), Role::Dc),
            MockPin(bus.clone(), Role::Cs),
            MockPin(bus.clone(), Role::Rst),
        );
        (panel, bus)
    }

    fn commands(bus: &Shared) -> Vec<u8> {
        bus.borrow()
            .log
            .iter()
            .filter_map(|w| match w {
                Wire::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    fn data(bus: &Shared) -> Vec<u8> {
        bus.borrow()
            .log
            .iter()
            .filter_map(|w| match w {
                Wire::Data(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_init_sequence() {
        let (mut panel, bus) = panel();
        let mut delay = NoDelay { total_ms: 0 };
        panel.init(&mut delay).unwrap();

        assert_eq!(
            commands(&bus),
            vec![
                cmd::SWRESET,
                cmd::SLPOUT,
                cmd::COLMOD,
                cmd::MADCTL,
                cmd::DISPON
            ]
        );
        assert_eq!(data(&bus), vec![COLMOD_RGB565, MADCTL_DEFAULT]);
        assert_eq!(delay.total_ms, 100 + 100 + 150 + 500 + 10 + 100);

        let bus = bus.borrow();
        assert_eq!(bus.log[1], Wire::Reset(true));
        assert_eq!(bus.log[2], Wire::Reset(false));
    }

    #[test]
    fn test_rect_sets_window_and_streams_pixels() {
        let (mut panel, bus) = panel();
        panel.draw_rect(16, 32, 3, 2, Rgb565(0xABCD)).unwrap();

        assert_eq!(commands(&bus), vec![cmd::CASET, cmd::RASET, cmd::RAMWR]);

        let bytes = data(&bus);
        assert_eq!(&bytes[..4], &[0, 16, 0, 18]);
        assert_eq!(&bytes[4..8], &[0, 32, 0, 33]);
        let pixels = &bytes[8..];
        assert_eq!(pixels.len(), 3 * 2 * 2);
        assert!(pixels.chunks(2).all(|p| p == [0xAB, 0xCD]));
    }

    #[test]
    fn test_rect_is_clipped() {
        let (mut panel, bus) = panel();
        panel.draw_rect(120, 126, 16, 16, Rgb565::WHITE).unwrap();

        let bytes = data(&bus);
        assert_eq!(&bytes[..4], &[0, 120, 0, 127]);
        assert_eq!(&bytes[4..8], &[0, 126, 0, 127]);
        assert_eq!(bytes.len() - 8, 8 * 2 * 2);
    }

    #[test]
    fn test_off_panel_rect_is_noop() {
        let (mut panel, bus) = panel();
        panel.draw_rect(128, 0, 4, 4, Rgb565::WHITE).unwrap();
        panel.draw_rect(0, 0, 0, 4, Rgb565::WHITE).unwrap();
        assert!(bus.borrow().log.is_empty());
    }

    #[test]
    fn test_large_fill_is_chunked() {
        let (mut panel, bus) = panel();
        panel.clear(Rgb565::BLACK).unwrap();
        assert_eq!(data(&bus).len() - 8, 128 * 128 * 2);
    }

    #[test]
    fn test_bus_error_deselects() {
        let (mut panel, bus) = panel();
        bus.borrow_mut().fail_spi = true;

        assert_eq!(
            panel.draw_rect(0, 0, 4, 4, Rgb565::WHITE),
            Err(DisplayError::Bus)
        );
        assert_eq!(bus.borrow().log.last(), Some(&Wire::Select(false)));
    }
}
