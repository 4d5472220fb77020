//! blockfall runner (default binary).
//!
//! Drives a [`GameLoop`] from crossterm key events and the gravity timer,
//! drawing through the framebuffer-based [`TerminalScreen`].

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use blockfall::config::GameConfig;
use blockfall::core::{GameState, PieceRandom, SimpleRng};
use blockfall::engine::{GameLoop, LoopEvent};
use blockfall::input::{handle_key_event, is_command_event, should_quit};
use blockfall::logging;
use blockfall::term::{GameView, TerminalScreen};

/// Poll interval once the timer is cancelled and only quit/resize matter.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;
    info!("starting with {:?}", config);

    let mut screen = TerminalScreen::new(GameView::default());
    screen.enter()?;

    let result = run(&config, &mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}

fn piece_source(seed: Option<u32>) -> Box<dyn PieceRandom> {
    match seed {
        Some(seed) => Box::new(SimpleRng::new(seed)),
        None => Box::new(StdRng::from_entropy()),
    }
}

fn run(config: &GameConfig, screen: &mut TerminalScreen) -> Result<()> {
    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;

    let state = GameState::new(piece_source(config.seed));
    let mut game = GameLoop::new(state, screen, config.tick_interval_ms, now_ms());
    game.redraw()?;

    loop {
        let timeout = game
            .timer()
            .remaining_ms(now_ms())
            .map(Duration::from_millis)
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_command_event(&key) => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.handle(LoopEvent::Command(action), now_ms())?;
                    }
                }
                Event::Resize(_, _) => {
                    game.renderer_mut().invalidate();
                    game.redraw()?;
                }
                _ => {}
            }
        }

        game.poll_timer(now_ms())?;
    }
}
