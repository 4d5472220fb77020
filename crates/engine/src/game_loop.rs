//! Event dispatch for a running game.

use log::{debug, info};

use crate::core::{GameState, PieceRandom, Renderer};
use crate::timer::TickTimer;
use crate::types::{GameAction, TickOutcome};

/// Events the host feeds into the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// The gravity timer fired.
    Tick,
    /// A player command from the input source.
    Command(GameAction),
}

/// Owns the game, its renderer and the gravity timer.
///
/// Every handled event runs to completion and is followed by exactly one
/// render call. The timer is cancelled the moment the game ends.
pub struct GameLoop<R, V> {
    state: GameState<R>,
    renderer: V,
    timer: TickTimer,
}

impl<R: PieceRandom, V: Renderer> GameLoop<R, V> {
    pub fn new(state: GameState<R>, renderer: V, interval_ms: u64, now_ms: u64) -> Self {
        let mut timer = TickTimer::new(interval_ms, now_ms);
        if state.game_over() {
            timer.cancel();
        }
        Self {
            state,
            renderer,
            timer,
        }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut V {
        &mut self.renderer
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// Dispatch one event, then redraw.
    ///
    /// Commands after game over leave the state untouched but still redraw.
    pub fn handle(&mut self, event: LoopEvent, now_ms: u64) -> Result<(), V::Error> {
        match event {
            LoopEvent::Tick => self.on_tick(now_ms),
            LoopEvent::Command(action) => {
                let changed = self.state.apply_action(action);
                debug!("command {} accepted={}", action.as_str(), changed);
            }
        }
        self.redraw()
    }

    /// Run a tick if the timer is due. Returns whether one ran.
    pub fn poll_timer(&mut self, now_ms: u64) -> Result<bool, V::Error> {
        if !self.timer.is_due(now_ms) {
            return Ok(false);
        }
        self.handle(LoopEvent::Tick, now_ms)?;
        Ok(true)
    }

    /// Render the current state without changing it.
    pub fn redraw(&mut self) -> Result<(), V::Error> {
        self.renderer.render(
            self.state.board(),
            self.state.active(),
            self.state.game_over(),
        )
    }

    fn on_tick(&mut self, now_ms: u64) {
        let outcome = self.state.tick();
        self.timer.fire(now_ms);

        match outcome {
            TickOutcome::Locked { lines_cleared } if lines_cleared > 0 => {
                info!("{} line(s) cleared", lines_cleared);
            }
            TickOutcome::GameOver => {
                if self.timer.cancel() {
                    info!(
                        "game over after {} pieces, gravity timer cancelled",
                        self.state.piece_id()
                    );
                }
            }
            _ => {}
        }
    }
}
