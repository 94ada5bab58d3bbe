//! Seedable randomness source
//!
//! Every random decision in the games (spawn positions, enemy speeds,
//! wave composition) goes through [`GameRng`] so a seed fully determines
//! a run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Seeded PCG generator plus the seed it started from
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewind to the start of the seed's sequence
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// Uniform value in `[0, 1)`
    pub fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform value in `[0, max)`; zero or negative `max` yields 0
    pub fn below(&mut self, max: f32) -> f32 {
        if max <= 0.0 {
            return 0.0;
        }
        self.unit() * max
    }

    /// Uniform index in `0..n` (`n` must be non-zero)
    pub fn index(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    /// `true` with probability `p`
    pub fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }
}
