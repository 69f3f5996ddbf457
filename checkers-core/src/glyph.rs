//! Piece bitmaps
//!
//! 14x14 two-colour glyphs. Each pixel is transparent, fill (the piece's
//! side colour) or outline.

use crate::board::{Cell, Rank};

/// Glyph width and height in pixels
pub const GLYPH_SIZE: usize = 14;

type Bitmap = [[u8; GLYPH_SIZE]; GLYPH_SIZE];

/// Which bitmap to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Plain disc
    Man,
    /// Disc with a crown
    King,
}

/// Decoded bitmap pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphPixel {
    Transparent,
    Fill,
    Outline,
}

impl From<u8> for GlyphPixel {
    fn from(raw: u8) -> Self {
        match raw {
            1 => GlyphPixel::Fill,
            2 => GlyphPixel::Outline,
            _ => GlyphPixel::Transparent,
        }
    }
}

impl Glyph {
    /// Glyph used to draw the piece in `cell`, if any
    pub fn for_cell(cell: Cell) -> Option<Self> {
        cell.rank().map(|rank| match rank {
            Rank::Man => Glyph::Man,
            Rank::King => Glyph::King,
        })
    }

    /// Row-major pixel data, `[row][col]`
    pub fn bitmap(self) -> &'static Bitmap {
        match self {
            Glyph::Man => &MAN,
            Glyph::King => &KING,
        }
    }
}

#[rustfmt::skip]
static MAN: Bitmap = [
    [0,0,0,0,0,2,2,2,2,0,0,0,0,0],
    [0,0,0,2,2,1,1,1,1,2,2,0,0,0],
    [0,0,2,1,1,1,1,1,1,1,1,2,0,0],
    [0,2,1,1,1,1,1,1,1,1,1,1,2,0],
    [0,2,1,1,1,1,1,1,1,1,1,1,2,0],
    [2,1,1,1,1,1,1,1,1,1,1,1,1,2],
    [2,1,1,1,1,1,1,1,1,1,1,1,1,2],
    [2,1,1,1,1,1,1,1,1,1,1,1,1,2],
    [2,1,1,1,1,1,1,1,1,1,1,1,1,2],
    [0,2,1,1,1,1,1,1,1,1,1,1,2,0],
    [0,2,1,1,1,1,1,1,1,1,1,1,2,0],
    [0,0,2,1,1,1,1,1,1,1,1,2,0,0],
    [0,0,0,2,2,1,1,1,1,2,2,0,0,0],
    [0,0,0,0,0,2,2,2,2,0,0,0,0,0],
];

#[rustfmt::skip]
static KING: Bitmap = [
    [0,0,0,0,0,2,2,2,2,0,0,0,0,0],
    [0,0,0,2,1,1,1,1,1,1,2,0,0,0],
    [0,0,2,1,1,1,1,1,1,1,1,2,0,0],
    [0,2,1,1,1,1,1,1,1,1,1,1,2,0],
    [0,2,1,1,1,1,1,1,1,1,1,1,2,0],
    [2,1,1,2,1,1,2,2,1,1,2,1,1,2],
    [2,1,1,2,2,1,2,2,1,2,2,1,1,2],
    [2,1,1,2,2,2,2,2,2,2,2,1,1,2],
    [2,1,1,2,2,2,2,2,2,2,2,1,1,2],
    [0,2,1,1,1,1,1,1,1,1,1,1,2,0],
    [0,2,1,1,1,1,1,1,1,1,1,1,2,0],
    [0,0,2,1,1,1,1,1,1,1,1,2,0,0],
    [0,0,0,2,1,1,1,1,1,1,2,0,0,0],
    [0,0,0,0,0,2,2,2,2,0,0,0,0,0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_for_cell() {
        assert_eq!(Glyph::for_cell(Cell::Empty), None);
        assert_eq!(Glyph::for_cell(Cell::ManDark), Some(Glyph::Man));
        assert_eq!(Glyph::for_cell(Cell::KingLight), Some(Glyph::King));
    }

    #[test]
    fn test_bitmaps_use_two_colours() {
        for glyph in [Glyph::Man, Glyph::King] {
            let pixels = glyph.bitmap().iter().flatten();
            assert!(pixels.clone().any(|&p| GlyphPixel::from(p) == GlyphPixel::Fill));
            assert!(pixels.clone().any(|&p| GlyphPixel::from(p) == GlyphPixel::Outline));
            assert!(pixels.clone().all(|&p| p <= 2));
        }
    }
}
