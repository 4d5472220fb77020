//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of a
//! frozen piece. Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Row 0 is the spawn row; a frozen cell there ends the game.

use crate::piece::ActivePiece;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision rule for piece cells.
    ///
    /// Blocks when x is outside `[0, width)`, when `y >= height`, or when the
    /// cell is occupied. Rows above the top (`y < 0`) never block.
    pub fn cell_blocks(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        self.is_occupied(x, y)
    }

    /// Check if a row has no frozen cells
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return true;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_none())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, compact the rest downwards, and refill the top
    /// with empty rows. Returns the number of rows removed.
    ///
    /// Uses a two-pointer pass from the bottom with zero allocation; surviving
    /// rows keep their relative order.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;
        let mut cleared = 0;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Write the piece's color into every cell of its footprint.
    ///
    /// The caller must only freeze a validated piece. If any target cell is
    /// out of bounds or occupied nothing is written and `false` is returned.
    pub fn freeze(&mut self, piece: &ActivePiece) -> bool {
        let cells = piece.cells();
        if cells.iter().any(|&(x, y)| !matches!(self.get(x, y), Some(None))) {
            return false;
        }

        for &(x, y) in &cells {
            self.set(x, y, Some(piece.color));
        }

        true
    }

    /// Fill every column of row `y` except `gap` (if given) with `color`.
    ///
    /// Setup helper for tests and benchmarks; the game never calls it.
    pub fn fill_row(&mut self, y: i8, color: Color, gap: Option<i8>) {
        for x in 0..BOARD_WIDTH as i8 {
            if Some(x) != gap {
                self.set(x, y, Some(color));
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(Color::Cyan));
        board.set(5, 10, Some(Color::Purple));

        assert_eq!(board.get(0, 0), Some(Some(Color::Cyan)));
        assert_eq!(board.get(5, 10), Some(Some(Color::Purple)));

        assert_eq!(board.cells[0], Some(Color::Cyan));
        assert_eq!(board.cells[10 * 10 + 5], Some(Color::Purple));
    }

    #[test]
    fn test_cell_blocks_ignores_rows_above_top() {
        let board = Board::new();
        assert!(!board.cell_blocks(4, -1));
        assert!(!board.cell_blocks(4, -3));
        // Side walls still block above the top.
        assert!(board.cell_blocks(-1, -1));
        assert!(board.cell_blocks(10, -1));
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let mut board = Board::new();
        board.set(2, 19, Some(Color::Red));

        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[19][2], Some(Color::Red));
        assert!(rows[0].iter().all(|c| c.is_none()));
    }
}
