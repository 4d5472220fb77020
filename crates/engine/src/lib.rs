//! Loop driver - ties time and input to the game state.
//!
//! The core `GameState` never schedules anything itself. This crate owns the
//! gravity timer and the event dispatch that runs one event to completion,
//! then asks the renderer for a frame.
//!
//! Time is passed in as milliseconds since an arbitrary start, so the whole
//! loop can be driven from tests without sleeping.

pub mod game_loop;
pub mod timer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use game_loop::{GameLoop, LoopEvent};
pub use timer::TickTimer;
