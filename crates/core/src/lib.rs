//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has
//! **zero dependencies** on UI, terminals or I/O, making it:
//!
//! - **Deterministic**: a seeded or scripted random source replays a game exactly
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: any front end that implements [`Renderer`] can draw it
//!
//! # Module Structure
//!
//! - [`shape`]: the seven tetromino matrices, their colors, and rotation
//! - [`board`]: 10x20 grid with collision checks, freezing and line clearing
//! - [`piece`]: the active piece and its pure move/rotate transforms
//! - [`rng`]: injectable random sources for piece selection
//! - [`game_state`]: the engine tying it all together
//! - [`render`]: the contract for drawing a frame
//!
//! # Game Rules
//!
//! - Pieces are picked uniformly at random from the catalog
//! - Rotation is clockwise only, with no wall kicks
//! - A piece that cannot fall on a tick is frozen immediately (no lock delay)
//! - The game ends when a freeze leaves a block in row 0, or a new piece
//!   cannot spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, SimpleRng};
//! use blockfall_types::{GameAction, TickOutcome};
//!
//! let mut game = GameState::new(SimpleRng::new(12345));
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! assert_eq!(game.tick(), TickOutcome::Fell);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod render;
pub mod rng;
pub mod shape;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use piece::ActivePiece;
pub use render::Renderer;
pub use rng::{PieceRandom, ScriptedRandom, SimpleRng};
pub use shape::{all_shapes, entry_for, CatalogEntry, Shape, CATALOG};
