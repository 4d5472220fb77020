//! Active piece - the falling, player-controlled shape instance
//!
//! Movement and rotation are pure: they return a new candidate piece and never
//! check validity. The game state decides whether to commit a candidate.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::shape::{CatalogEntry, Shape, MAX_SHAPE_CELLS};
use crate::types::{Color, PieceKind, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    /// Catalog kind this piece was spawned from (diagnostics only)
    pub kind: PieceKind,
    /// Current rotation state
    pub shape: Shape,
    pub color: Color,
    /// Column of the shape origin
    pub x: i8,
    /// Row of the shape origin
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the spawn position for `entry`.
    ///
    /// x = floor(width / 2) - floor(shape_width / 2), y = 0.
    pub fn spawn(entry: &CatalogEntry) -> Self {
        let x = (BOARD_WIDTH / 2) as i8 - (entry.shape.width() / 2) as i8;
        Self {
            kind: entry.kind,
            shape: entry.shape,
            color: entry.color,
            x,
            y: 0,
        }
    }

    /// Shifted copy. Validity is not checked.
    pub fn translate(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy with the shape rotated 90° clockwise around the same origin.
    pub fn rotate_cw(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> ArrayVec<(i8, i8), MAX_SHAPE_CELLS> {
        self.shape
            .cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Check that no occupied cell is blocked on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| !board.cell_blocks(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::entry_for;

    #[test]
    fn test_spawn_positions() {
        assert_eq!(ActivePiece::spawn(entry_for(PieceKind::I)).x, 3);
        assert_eq!(ActivePiece::spawn(entry_for(PieceKind::O)).x, 4);
        assert_eq!(ActivePiece::spawn(entry_for(PieceKind::T)).x, 4);
        assert_eq!(ActivePiece::spawn(entry_for(PieceKind::T)).y, 0);
    }

    #[test]
    fn test_translate_is_pure() {
        let piece = ActivePiece::spawn(entry_for(PieceKind::S));
        let moved = piece.translate(-2, 5);
        assert_eq!((moved.x, moved.y), (piece.x - 2, piece.y + 5));
        assert_eq!(moved.shape, piece.shape);
        assert_eq!(piece.y, 0);
    }

    #[test]
    fn test_rotate_keeps_origin_and_color() {
        let piece = ActivePiece::spawn(entry_for(PieceKind::L)).translate(1, 3);
        let rotated = piece.rotate_cw();
        assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
        assert_eq!(rotated.color, Color::Orange);
        assert_ne!(rotated.shape, piece.shape);
    }

    #[test]
    fn test_cells_are_absolute() {
        let piece = ActivePiece::spawn(entry_for(PieceKind::I)).translate(0, 7);
        assert_eq!(piece.cells().as_slice(), &[(3, 7), (4, 7), (5, 7), (6, 7)]);
    }
}
