//! Display driver trait

use crate::glyph::{Glyph, GlyphPixel, GLYPH_SIZE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI transfer failed
    Bus,
    /// Control pin (DC/CS/RST) could not be driven
    Pin,
}

/// 16-bit colour in the panel's native 5-6-5 layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    // The panel is driven in BGR order, so red sits in the low bits
    pub const BLACK: Self = Self(0x0000);
    pub const RED: Self = Self(0x001F);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0xF800);
    pub const WHITE: Self = Self(0xFFFF);

    /// Big-endian byte pair as sent over the wire
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// Trait for a pixel display
///
/// Only [`DisplayDriver::draw_rect`] is required. Glyphs are blitted as
/// horizontal runs of rectangles by default; drivers with a faster path
/// may override [`DisplayDriver::draw_glyph`].
pub trait DisplayDriver {
    /// Fill a `w` x `h` rectangle whose top-left corner is at (`x`, `y`)
    fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb565)
        -> Result<(), DisplayError>;

    /// Draw a glyph with its top-left corner at (`x`, `y`)
    ///
    /// Transparent glyph pixels leave the background untouched.
    fn draw_glyph(
        &mut self,
        x: u16,
        y: u16,
        glyph: Glyph,
        fill: Rgb565,
        outline: Rgb565,
    ) -> Result<(), DisplayError> {
        for (row, pixels) in glyph.bitmap().iter().enumerate() {
            let mut col = 0;
            while col < GLYPH_SIZE {
                let pixel = GlyphPixel::from(pixels[col]);
                let start = col;
                while col < GLYPH_SIZE && GlyphPixel::from(pixels[col]) == pixel {
                    col += 1;
                }

                let color = match pixel {
                    GlyphPixel::Transparent => continue,
                    GlyphPixel::Fill => fill,
                    GlyphPixel::Outline => outline,
                };
                self.draw_rect(
                    x.saturating_add(start as u16),
                    y.saturating_add(row as u16),
                    (col - start) as u16,
                    1,
                    color,
                )?;
            }
        }
        Ok(())
    }
}

/// Helper trait for drawing common board elements
pub trait DisplayExt: DisplayDriver {
    /// Draw a square frame of side `size` and line width `thickness`
    fn draw_outline(
        &mut self,
        x: u16,
        y: u16,
        size: u16,
        thickness: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let inner = size.saturating_sub(thickness);
        // Top, bottom, left, right
        self.draw_rect(x, y, size, thickness, color)?;
        self.draw_rect(x, y.saturating_add(inner), size, thickness, color)?;
        self.draw_rect(x, y, thickness, size, color)?;
        self.draw_rect(x.saturating_add(inner), y, thickness, size, color)
    }
}

// Blanket implementation for all DisplayDriver types
impl<T: DisplayDriver> DisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{DrawOp, MockDisplay};

    #[test]
    fn test_glyph_blit_covers_every_opaque_pixel() {
        let mut display = MockDisplay::new();
        display
            .draw_glyph(10, 20, Glyph::Man, Rgb565::RED, Rgb565::WHITE)
            .unwrap();

        let painted: usize = display
            .ops
            .iter()
            .map(|op| match op {
                DrawOp::Rect { w, h, .. } => (*w as usize) * (*h as usize),
            })
            .sum();
        let opaque = Glyph::Man
            .bitmap()
            .iter()
            .flatten()
            .filter(|&&p| GlyphPixel::from(p) != GlyphPixel::Transparent)
            .count();
        assert_eq!(painted, opaque);

        // Every run stays inside the glyph box
        for op in &display.ops {
            let DrawOp::Rect { x, y, w, .. } = *op;
            assert!(x >= 10 && x + w <= 10 + GLYPH_SIZE as u16);
            assert!(y >= 20 && y < 20 + GLYPH_SIZE as u16);
        }
    }

    #[test]
    fn test_outline_draws_four_edges() {
        let mut display = MockDisplay::new();
        display.draw_outline(16, 32, 16, 2, Rgb565::WHITE).unwrap();

        assert_eq!(display.ops.len(), 4);
        assert!(display.ops.contains(&DrawOp::Rect {
            x: 16,
            y: 46,
            w: 16,
            h: 2,
            color: Rgb565::WHITE
        }));
        assert!(display.ops.contains(&DrawOp::Rect {
            x: 30,
            y: 32,
            w: 2,
            h: 16,
            color: Rgb565::WHITE
        }));
    }

    #[test]
    fn test_error_stops_blit() {
        let mut display = MockDisplay::new();
        display.fail_after = Some(3);
        let result = display.draw_glyph(0, 0, Glyph::King, Rgb565::BLACK, Rgb565::WHITE);

        assert_eq!(result, Err(DisplayError::Bus));
        assert_eq!(display.ops.len(), 3);
    }
}
