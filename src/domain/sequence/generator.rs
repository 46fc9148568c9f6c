//! Seeded Sequence Generator - a PCG32 stream from `rand_pcg`.
//!
//! Only variant selection draws from this generator, and every build owns
//! its own instance, so the draw order inside one build fully determines
//! the output for a given seed.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Deterministic pseudo-random sequence.
#[derive(Debug, Clone)]
pub struct SeededSequence {
    rng: Pcg32,
}

impl SeededSequence {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform value in [0, 1).
    pub fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform index in `0..len`, or `None` for an empty range.
    ///
    /// Consumes a draw only when `len > 0`.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }

    /// Index chosen with probability proportional to its weight.
    ///
    /// Returns `None` without drawing when the weights are empty, all zero,
    /// negative or not finite.
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let distribution = WeightedIndex::<f64>::new(weights).ok()?;
        Some(distribution.sample(&mut self.rng))
    }

    /// In-place shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl RngCore for SeededSequence {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl SeedableRng for SeededSequence {
    type Seed = <Pcg32 as SeedableRng>::Seed;

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed),
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
