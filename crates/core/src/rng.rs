//! RNG module - injectable random sources for piece selection
//!
//! The game never touches a global RNG. It asks a [`PieceRandom`] for an index
//! into the shape catalog, so tests can script the exact piece sequence and
//! production builds can draw from the OS entropy pool.
//!
//! Also provides a simple LCG for deterministic runs.

use rand::rngs::StdRng;
use rand::Rng;

/// Source of uniformly distributed catalog indices.
pub trait PieceRandom {
    /// Return an index in `[0, len)`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: PieceRandom + ?Sized> PieceRandom for Box<R> {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

impl PieceRandom for StdRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// have very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceRandom for SimpleRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }
}

/// Replays a fixed list of indices, wrapping around at the end.
///
/// Values are reduced modulo `len`, so a script written for the 7-entry catalog
/// never produces an out-of-range index.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    pos: usize,
}

impl ScriptedRandom {
    /// # Panics
    ///
    /// Panics if `picks` is empty.
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        let picks = picks.into();
        assert!(!picks.is_empty(), "ScriptedRandom needs at least one pick");
        Self { picks, pos: 0 }
    }

    /// Always return the same index.
    pub fn constant(index: usize) -> Self {
        Self::new(vec![index])
    }

    /// Number of indices handed out so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl PieceRandom for ScriptedRandom {
    fn next_index(&mut self, len: usize) -> usize {
        let pick = self.picks[self.pos % self.picks.len()];
        self.pos += 1;
        pick % len
    }
}
