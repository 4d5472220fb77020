//! Renderer contract between the game and whatever draws it.

use crate::board::Board;
use crate::piece::ActivePiece;

/// Draws one frame of game state.
///
/// The game only supplies grid coordinates, a color per occupied cell and the
/// game-over flag. Pixel or character sizes are the implementor's business.
pub trait Renderer {
    type Error;

    /// `active` is `None` only if the very first spawn of a game failed.
    fn render(
        &mut self,
        board: &Board,
        active: Option<&ActivePiece>,
        game_over: bool,
    ) -> Result<(), Self::Error>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn render(
        &mut self,
        board: &Board,
        active: Option<&ActivePiece>,
        game_over: bool,
    ) -> Result<(), Self::Error> {
        (**self).render(board, active, game_over)
    }
}
