//! Round configuration.
//!
//! Hosts configure a session at startup: how many pieces the puzzle
//! has, how many seconds the countdown runs, and (optionally) the RNG
//! seed for reproducible level sequences. Values are validated at
//! construction and the fields are private, so the rest of the engine
//! can assume `weight >= 1` and `timer_secs >= 1` everywhere.

/// Complete round configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundConfig {
    /// Number of pieces in the puzzle (length of the target pattern).
    weight: usize,

    /// Countdown duration in seconds.
    timer_secs: u32,

    /// Seed for the level generator.
    seed: u64,
}

impl RoundConfig {
    /// Create a new configuration.
    ///
    /// Panics if `weight` or `timer_secs` is zero. Both are host
    /// integration errors, not runtime conditions.
    pub fn new(weight: usize, timer_secs: u32) -> Self {
        assert!(weight >= 1, "Puzzle must have at least 1 piece");
        assert!(timer_secs >= 1, "Countdown must run at least 1 second");

        Self {
            weight,
            timer_secs,
            seed: 0,
        }
    }

    /// Set the generator seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of pieces in the puzzle.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// Countdown duration in seconds.
    #[must_use]
    pub fn timer_secs(&self) -> u32 {
        self.timer_secs
    }

    /// Seed for the level generator.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
