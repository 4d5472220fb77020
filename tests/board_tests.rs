//! Board tests

use blockfall::core::{entry_for, ActivePiece, Board};
use blockfall::types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(Color::Purple)));
    assert_eq!(board.get(5, 10), Some(Some(Color::Purple)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, Some(Color::Red)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(Color::Red)));
}

#[test]
fn test_cell_blocks_edges() {
    let board = Board::new();

    // Walls and floor block.
    assert!(board.cell_blocks(-1, 5));
    assert!(board.cell_blocks(BOARD_WIDTH as i8, 5));
    assert!(board.cell_blocks(4, BOARD_HEIGHT as i8));

    // Above the board never blocks.
    assert!(!board.cell_blocks(4, -1));
    assert!(!board.cell_blocks(4, -3));

    assert!(!board.cell_blocks(4, 4));
}

#[test]
fn test_row_with_gap_is_not_cleared() {
    let mut board = Board::new();
    board.fill_row(19, Color::Blue, Some(7));

    assert!(!board.is_row_full(19));
    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board.get(0, 19), Some(Some(Color::Blue)));
    assert_eq!(board.get(7, 19), Some(None));
}

#[test]
fn test_filling_gap_clears_and_shifts_down() {
    let mut board = Board::new();
    board.fill_row(19, Color::Blue, Some(7));
    board.set(2, 18, Some(Color::Green));
    board.set(8, 17, Some(Color::Red));

    board.set(7, 19, Some(Color::Orange));
    assert_eq!(board.clear_full_lines(), 1);

    assert_eq!(board.get(2, 19), Some(Some(Color::Green)));
    assert_eq!(board.get(8, 18), Some(Some(Color::Red)));
    assert!(board.is_row_empty(0));
    assert!(board.is_row_empty(17));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_clear_non_adjacent_lines() {
    let mut board = Board::new();
    board.fill_row(19, Color::Cyan, None);
    board.fill_row(18, Color::Cyan, Some(0));
    board.fill_row(17, Color::Cyan, None);
    board.set(5, 16, Some(Color::Yellow));

    assert_eq!(board.clear_full_lines(), 2);

    // The partial row lands on the floor with the marker right above it.
    assert_eq!(board.get(0, 19), Some(None));
    assert_eq!(board.get(1, 19), Some(Some(Color::Cyan)));
    assert_eq!(board.get(5, 18), Some(Some(Color::Yellow)));
    assert!(board.is_row_empty(17));
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        board.fill_row(y, Color::Red, None);
    }

    assert_eq!(board.clear_full_lines(), BOARD_HEIGHT as usize);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_freeze_writes_piece_color() {
    let mut board = Board::new();
    let piece = ActivePiece::spawn(entry_for(PieceKind::O)).translate(0, 18);

    assert!(board.freeze(&piece));
    for (x, y) in piece.cells() {
        assert_eq!(board.get(x, y), Some(Some(Color::Yellow)));
    }
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
}

#[test]
fn test_freeze_rejects_invalid_position() {
    let mut board = Board::new();
    board.set(4, 0, Some(Color::Red));
    let before = board.clone();

    let piece = ActivePiece::spawn(entry_for(PieceKind::O));
    assert!(!board.freeze(&piece));
    assert_eq!(board, before);
}

#[test]
fn test_rows_iterate_top_to_bottom() {
    let mut board = Board::new();
    board.set(3, 2, Some(Color::Green));

    let rows: Vec<&[Option<Color>]> = board.rows().collect();
    assert_eq!(rows.len(), BOARD_HEIGHT as usize);
    assert_eq!(rows[2][3], Some(Color::Green));
    assert!(rows[0].iter().all(|c| c.is_none()));
}
