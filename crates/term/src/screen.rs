//! TerminalScreen: the game's [`Renderer`] for a real terminal.
//!
//! Composes the pure [`GameView`] with the [`TerminalRenderer`] and keeps one
//! framebuffer alive across frames.

use anyhow::Result;

use crate::core::{ActivePiece, Board, Renderer};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Fallback used when the terminal size cannot be queried.
const FALLBACK_VIEWPORT: (u16, u16) = (80, 24);

pub struct TerminalScreen {
    view: GameView,
    term: TerminalRenderer,
    fb: FrameBuffer,
}

impl TerminalScreen {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            term: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }

    /// Force a full redraw on the next frame (terminal resized).
    pub fn invalidate(&mut self) {
        self.term.invalidate();
    }
}

impl Renderer for TerminalScreen {
    type Error = anyhow::Error;

    fn render(
        &mut self,
        board: &Board,
        active: Option<&ActivePiece>,
        game_over: bool,
    ) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or(FALLBACK_VIEWPORT);
        self.view
            .render_into(board, active, game_over, Viewport::new(w, h), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}
