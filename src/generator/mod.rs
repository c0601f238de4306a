//! Random target-pattern generation.
//!
//! Each round needs a fresh target: `weight` rotations drawn
//! independently and uniformly from the rotation domain. The one rule
//! beyond uniformity is that consecutive rounds must not present the
//! same puzzle, so generation against a prior level resamples until the
//! candidate differs.

use log::warn;

use crate::core::{PuzzleRng, Rotation, RotationSet};

/// Resample budget for `generate_distinct`.
///
/// With four rotations and weight >= 1 a duplicate candidate has
/// probability at most 1/4 per attempt, so the cap is unreachable in
/// practice. It exists so a degenerate one-pattern space (weight 1 with
/// a collapsed domain) terminates by accepting the duplicate instead of
/// spinning forever.
const MAX_DISTINCT_ATTEMPTS: u32 = 64;

/// Produces random target patterns from a deterministic RNG.
#[derive(Clone, Debug)]
pub struct LevelGenerator {
    rng: PuzzleRng,
}

impl LevelGenerator {
    /// Create a generator over an existing RNG.
    #[must_use]
    pub fn new(rng: PuzzleRng) -> Self {
        Self { rng }
    }

    /// Create a generator from a seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(PuzzleRng::new(seed))
    }

    /// Generate a pattern of exactly `weight` rotations, each drawn
    /// independently and uniformly. Repetition between elements is
    /// allowed.
    pub fn generate(&mut self, weight: usize) -> RotationSet {
        debug_assert!(weight >= 1, "weight must be at least 1");
        (0..weight)
            .map(|_| {
                let index = self.rng.gen_range_usize(0..Rotation::DOMAIN.len());
                Rotation::DOMAIN[index]
            })
            .collect()
    }

    /// Generate a pattern that differs from `prior`.
    ///
    /// Always samples at least once. An empty `prior` (no round played
    /// yet) never equals a weight >= 1 candidate, so the first sample is
    /// accepted. On budget exhaustion the duplicate is accepted.
    pub fn generate_distinct(&mut self, weight: usize, prior: &RotationSet) -> RotationSet {
        let mut candidate = self.generate(weight);
        let mut attempts = 1;

        while candidate == *prior {
            if attempts >= MAX_DISTINCT_ATTEMPTS {
                warn!(
                    "level generation exhausted {} attempts without a distinct pattern; \
                     accepting the duplicate",
                    attempts
                );
                break;
            }
            candidate = self.generate(weight);
            attempts += 1;
        }

        candidate
    }
}
