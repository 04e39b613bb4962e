//! Injectable randomness.
//!
//! Ranking tie-breaks, the exploration slot, and backfill are the only random choices a
//! recommendation makes. They all go through [`RandomSource`] so tests can fix the outcome.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::index};

/// Source of the random numbers a recommendation needs.
pub trait RandomSource {
    /// Returns a uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Returns `k` distinct indices below `n`, in random order.
    ///
    /// `k` is clamped to `n`.
    fn sample(&mut self, n: usize, k: usize) -> Vec<usize>;
}

/// Adapts any [`rand::Rng`] to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    /// Underlying generator.
    rng: R,
}

impl<R: Rng> From<R> for RngSource<R> {
    fn from(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// A generator seeded from the operating system.
    pub fn entropy() -> Self {
        Self::from(StdRng::from_entropy())
    }

    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::from(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn sample(&mut self, n: usize, k: usize) -> Vec<usize> {
        index::sample(&mut self.rng, n, k.min(n)).into_vec()
    }
}
