//! Game state module - the game engine
//!
//! This module ties together the board, the active piece and the random
//! source. It owns the whole mutable state of a game and exposes the only
//! operations allowed to change it: spawn, move, rotate, freeze and tick.
//!
//! There is no error path. A rejected move or rotation is a no-op that returns
//! `false`; once the game is over every mutating call is a no-op.

use log::{debug, info};

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::rng::{PieceRandom, SimpleRng};
use crate::shape::all_shapes;
use crate::types::{GameAction, TickOutcome};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    /// `None` only when the very first spawn of the game failed.
    active: Option<ActivePiece>,
    game_over: bool,
    rng: R,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
}

impl<R: PieceRandom> GameState<R> {
    /// Start a game on an empty board and spawn the first piece
    pub fn new(rng: R) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Start a game on a pre-filled board.
    ///
    /// If the first piece cannot spawn the game starts over, with no active
    /// piece.
    pub fn with_board(board: Board, rng: R) -> Self {
        let mut state = Self {
            board,
            active: None,
            game_over: false,
            rng,
            piece_id: 0,
        };
        state.spawn_piece();
        state
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Pick a catalog entry and place it at the spawn position.
    ///
    /// If the candidate collides the game ends and the candidate is discarded;
    /// the previous active piece stays in place for redraws.
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let catalog = all_shapes();
        let entry = &catalog[self.rng.next_index(catalog.len())];
        let piece = ActivePiece::spawn(entry);

        if !piece.is_valid(&self.board) {
            info!(
                "spawn blocked for {} at ({}, {}), game over",
                entry.kind.as_str(),
                piece.x,
                piece.y
            );
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        debug!(
            "spawned piece #{} kind={} x={}",
            self.piece_id,
            entry.kind.as_str(),
            piece.x
        );
        true
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.translate(dx, dy);
        if candidate.is_valid(&self.board) {
            self.active = Some(candidate);
            return true;
        }

        false
    }

    /// Try to rotate the active piece clockwise, without wall kicks
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.rotate_cw();
        if candidate.is_valid(&self.board) {
            self.active = Some(candidate);
            return true;
        }

        false
    }

    /// Freeze the active piece into the board and continue with the next one.
    ///
    /// Row 0 holding any block after the freeze ends the game before lines are
    /// cleared. Otherwise full lines are cleared and a new piece spawns.
    pub fn lock_piece(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Halted;
        }
        let Some(active) = self.active else {
            return TickOutcome::Halted;
        };

        let frozen = self.board.freeze(&active);
        debug_assert!(frozen, "froze a piece at an invalid position");

        if !self.board.is_row_empty(0) {
            info!("piece #{} froze into the top row, game over", self.piece_id);
            self.game_over = true;
            return TickOutcome::GameOver;
        }

        let lines_cleared = self.board.clear_full_lines();
        if lines_cleared > 0 {
            debug!("cleared {} line(s)", lines_cleared);
        }

        if !self.spawn_piece() {
            return TickOutcome::GameOver;
        }

        TickOutcome::Locked { lines_cleared }
    }

    /// One gravity step: fall one row, or freeze when the piece cannot fall.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Halted;
        }

        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }

        self.lock_piece()
    }

    /// Apply a player command. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;
    use crate::types::{Color, PieceKind};

    const I: usize = 0;
    const O: usize = 1;
    const T: usize = 6;

    fn game_with(index: usize) -> GameState<ScriptedRandom> {
        GameState::new(ScriptedRandom::constant(index))
    }

    #[test]
    fn test_new_game_state() {
        let state = game_with(T);

        assert!(!state.game_over());
        assert_eq!(state.piece_id(), 1);
        assert_eq!(state.active().map(|p| p.kind), Some(PieceKind::T));
        assert!(state.board().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_default_game_state() {
        let state: GameState = GameState::default();
        assert!(!state.game_over());
        assert!(state.active().is_some());
    }

    #[test]
    fn test_try_move() {
        let mut state = game_with(T);
        let initial_x = state.active().unwrap().x;

        assert!(state.try_move(1, 0));
        assert_eq!(state.active().unwrap().x, initial_x + 1);

        assert!(state.try_move(-1, 0));
        assert_eq!(state.active().unwrap().x, initial_x);
    }

    #[test]
    fn test_try_move_collision_with_wall() {
        let mut state = game_with(T);

        let mut moved = 0;
        for _ in 0..10 {
            if state.try_move(-1, 0) {
                moved += 1;
            }
        }
        // T spawns at x=4 and is 3 wide.
        assert_eq!(moved, 4);
        assert_eq!(state.active().unwrap().x, 0);
    }

    #[test]
    fn test_try_rotate_changes_shape() {
        let mut state = game_with(T);
        state.try_move(0, 1);
        let before = *state.active().unwrap();

        assert!(state.try_rotate());
        let after = *state.active().unwrap();
        assert_eq!(after.shape, before.shape.rotate_cw());
        assert_eq!((after.x, after.y), (before.x, before.y));
    }

    #[test]
    fn test_tick_gravity() {
        let mut state = game_with(O);
        assert_eq!(state.tick(), TickOutcome::Fell);
        assert_eq!(state.active().unwrap().y, 1);
    }

    #[test]
    fn test_tick_locks_on_floor() {
        let mut state = game_with(O);
        // O is two rows tall: y can reach 18.
        for _ in 0..18 {
            assert_eq!(state.tick(), TickOutcome::Fell);
        }
        assert_eq!(state.tick(), TickOutcome::Locked { lines_cleared: 0 });

        assert_eq!(state.board().get(4, 18), Some(Some(Color::Yellow)));
        assert_eq!(state.board().get(5, 19), Some(Some(Color::Yellow)));
        assert_eq!(state.piece_id(), 2);
        assert_eq!(state.active().unwrap().y, 0);
    }

    #[test]
    fn test_lock_piece_clears_lines() {
        let mut board = Board::new();
        // Bottom row full except the four I cells at x=3..=6.
        for x in [0, 1, 2, 7, 8, 9] {
            board.set(x, 19, Some(Color::Red));
        }
        let mut state = GameState::with_board(board, ScriptedRandom::constant(I));

        while state.try_move(0, 1) {}
        assert_eq!(state.tick(), TickOutcome::Locked { lines_cleared: 1 });
        assert!(state.board().is_row_empty(19));
    }

    #[test]
    fn test_apply_action_routes_commands() {
        let mut state = game_with(T);
        let start = *state.active().unwrap();

        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active().unwrap().x, start.x - 1);
        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active().unwrap().x, start.x);
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active().unwrap().y, start.y + 1);
        assert!(state.apply_action(GameAction::Rotate));
        assert_eq!(state.active().unwrap().shape, start.shape.rotate_cw());
    }

    #[test]
    fn test_game_over_stops_game() {
        let mut board = Board::new();
        board.set(4, 0, Some(Color::Blue));
        let mut state = GameState::with_board(board, ScriptedRandom::constant(I));

        assert!(state.game_over());
        assert!(state.active().is_none());
        assert_eq!(state.tick(), TickOutcome::Halted);
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.try_rotate());
        assert_eq!(state.lock_piece(), TickOutcome::Halted);
    }
}
