//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the closed [`crate::types::GameAction`]
//! command set. Keys outside that set are dropped here, so the game never
//! sees them. Quitting is a host concern and is reported separately by
//! [`should_quit`].

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_command_event, should_quit};
