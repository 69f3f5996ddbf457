//! Render task
//!
//! Redraws the whole board whenever the dirty flag is set, otherwise does
//! nothing. Runs on a long period because a full redraw over SPI is slow.

use super::{Task, TaskContext};
use crate::board::{Board, Side};
use crate::config::{LayoutConfig, Palette};
use crate::glyph::Glyph;
use crate::state::{GameEvent, GameState, Selection};
use crate::traits::{AnalogInput, ButtonInput, DisplayDriver, DisplayError, DisplayExt};

/// Render task states
///
/// Both states behave the same; `Rendering` only records that the last
/// tick attempted a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderState {
    Idle,
    Rendering,
}

/// Board renderer
#[derive(Debug, Clone)]
pub struct RenderTask {
    palette: Palette,
    layout: LayoutConfig,
}

impl RenderTask {
    pub fn new(palette: Palette, layout: LayoutConfig) -> Self {
        Self { palette, layout }
    }

    /// Draw the board, pieces, selection frame and cursor
    pub fn draw<D: DisplayDriver>(&self, game: &GameState, display: &mut D) -> Result<(), DisplayError> {
        let layout = &self.layout;
        let size = layout.cell_size;
        let inset = layout.glyph_inset();

        for pos in Board::positions() {
            let (x, y) = layout.cell_origin(pos.col, pos.row);
            let square = if pos.is_playable() {
                self.palette.square_dark
            } else {
                self.palette.square_light
            };
            display.draw_rect(x, y, size, size, square)?;

            let cell = game.board().get(pos);
            if let (Some(glyph), Some(side)) = (Glyph::for_cell(cell), cell.side()) {
                let fill = match side {
                    Side::Light => self.palette.piece_light,
                    Side::Dark => self.palette.piece_dark,
                };
                display.draw_glyph(
                    x.saturating_add(inset),
                    y.saturating_add(inset),
                    glyph,
                    fill,
                    self.palette.outline,
                )?;
            }
        }

        if let Selection::Held(source) = game.selection() {
            let (x, y) = layout.cell_origin(source.col, source.row);
            display.draw_outline(x, y, size, layout.frame_width, self.palette.selection)?;
        }

        let cursor = game.cursor();
        let (x, y) = layout.cell_origin(cursor.col, cursor.row);
        display.draw_outline(x, y, size, layout.frame_width, self.palette.cursor)
    }
}

impl Task for RenderTask {
    type State = RenderState;

    const NAME: &'static str = "render";

    fn initial_state(&self) -> RenderState {
        RenderState::Rendering
    }

    fn advance<D, J, B>(&self, _state: RenderState, cx: &mut TaskContext<'_, D, J, B>) -> RenderState
    where
        D: DisplayDriver,
        J: AnalogInput,
        B: ButtonInput,
    {
        if !cx.game.is_dirty() {
            return RenderState::Idle;
        }

        match self.draw(cx.game, &mut cx.io.display) {
            Ok(()) => {
                cx.game.clear_dirty();
                cx.game.record(GameEvent::Rendered);
            }
            Err(e) => {
                // Leave the flag set so the next period retries
                cx.game.record(GameEvent::RenderFailed(e));
            }
        }
        RenderState::Rendering
    }
}
