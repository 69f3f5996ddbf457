//! The 8x8 grid

use super::{Cell, Position, Rank, Side, BOARD_SIZE};

/// Rows occupied by each side in the standard opening
const DARK_HOME_ROWS: core::ops::Range<u8> = 0..3;
const LIGHT_HOME_ROWS: core::ops::Range<u8> = 5..8;

/// Board contents, indexed `[row][col]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// A board with no pieces
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard opening: men on the playable squares of the three home rows
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for pos in Self::positions().filter(|p| p.is_playable()) {
            let cell = if DARK_HOME_ROWS.contains(&pos.row) {
                Cell::piece(Side::Dark, Rank::Man)
            } else if LIGHT_HOME_ROWS.contains(&pos.row) {
                Cell::piece(Side::Light, Rank::Man)
            } else {
                Cell::Empty
            };
            board.set(pos, cell);
        }
        board
    }

    /// All squares in row-major order
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position::new(col, row)))
    }

    /// Contents of a square; off-board squares read as empty
    pub fn get(&self, pos: Position) -> Cell {
        if pos.in_bounds() {
            self.cells[pos.row as usize][pos.col as usize]
        } else {
            Cell::Empty
        }
    }

    /// Overwrite a square
    ///
    /// Returns `false` (and changes nothing) for an off-board square.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        if !pos.in_bounds() {
            return false;
        }
        self.cells[pos.row as usize][pos.col as usize] = cell;
        true
    }

    /// Move the piece on `from` to `to`, clearing `from`
    ///
    /// Fails closed (returns `false`, board unchanged) if either square is
    /// off the board, `from` is empty, or `to` is occupied.
    pub fn relocate(&mut self, from: Position, to: Position) -> bool {
        if !from.in_bounds() || !to.in_bounds() || from == to {
            return false;
        }
        let piece = self.get(from);
        if piece.is_empty() || self.get(to).is_occupied() {
            return false;
        }
        self.set(to, piece);
        self.set(from, Cell::Empty);
        true
    }

    /// Number of pieces (men and kings) owned by `side`
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.belongs_to(side))
            .count()
    }

    /// Occupied squares with their contents, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Self::positions()
            .map(|pos| (pos, self.get(pos)))
            .filter(|(_, cell)| cell.is_occupied())
    }
}
