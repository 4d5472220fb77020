//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, loop driver, terminal rendering).
//!
//! # Board Dimensions
//!
//! The playfield is fixed for the lifetime of the process:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top/spawn row)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 500 | Gravity interval, one row per tick |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.color(), Color::Purple);
//! assert_eq!(PieceKind::T.as_str(), "t");
//! assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default gravity interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 500;


/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **T**: Purple, T-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    S,
    Z,
    J,
    L,
    T,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Lowercase kind name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::T => "t",
        }
    }

    /// The color permanently associated with this kind.
    pub const fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Red,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::T => Color::Purple,
        }
    }
}

/// Block colors. A frozen cell remembers the color of the piece it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Green,
    Red,
    Blue,
    Orange,
    Purple,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell frozen with the color of a locked piece
pub type Cell = Option<Color>;

/// Player commands delivered by the input source
///
/// The set is closed: anything the input layer cannot map to one of these
/// is dropped before it reaches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (single step, not a hard drop)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
}

impl GameAction {
    /// camelCase command name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Result of one gravity tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The active piece moved down one row.
    Fell,
    /// The piece could not fall, was frozen, and a new piece spawned.
    Locked { lines_cleared: usize },
    /// This tick ended the game.
    GameOver,
    /// The game was already over; nothing happened.
    Halted,
}
