//! Deterministic random number generation for level sampling.
//!
//! Same seed, same sequence: a session seeded identically replays the
//! exact same series of target patterns.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing the level generator.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
