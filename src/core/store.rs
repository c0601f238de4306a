//! Round state store.
//!
//! `GameStore` is the single source of truth for the current round: the
//! target pattern, the host's piece handles, the win/lose flags, and the
//! progression counters. It is created once per session, owned by the
//! orchestrator, and passed by `&mut` to whoever needs it. There is no
//! ambient global.
//!
//! ## Flag discipline
//!
//! `win` and `loose` start false every round, are mutually exclusive,
//! and are terminal: once either is set, neither flag can change until
//! the next `begin_round`. The setters enforce this rather than trusting
//! every caller.

use serde::{Deserialize, Serialize};

use crate::core::config::RoundConfig;
use crate::core::piece::PieceId;
use crate::core::rotation::RotationSet;
use crate::error::PuzzleError;

/// Mutable state for one puzzle session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameStore {
    /// Target pattern for the current round.
    level: RotationSet,

    /// Host piece handles, index-aligned with `level`.
    pieces: Vec<PieceId>,

    /// Round won.
    win: bool,

    /// Round lost (countdown expired first).
    loose: bool,

    /// Accumulated score across rounds.
    score: u32,

    /// Piece count for the next generated level.
    weight: usize,

    /// Step counter within the current weight tier.
    step: u32,

    /// Configured countdown seconds for the round.
    timer_secs: u32,
}

impl GameStore {
    /// Create a fresh store from the session configuration.
    ///
    /// The level starts as the empty sentinel: no round has been
    /// generated yet, and any weight >= 1 candidate compares unequal to
    /// it.
    #[must_use]
    pub fn new(config: &RoundConfig) -> Self {
        Self {
            level: RotationSet::empty(),
            pieces: Vec::new(),
            win: false,
            loose: false,
            score: 0,
            weight: config.weight(),
            step: 0,
            timer_secs: config.timer_secs(),
        }
    }

    // === Round lifecycle ===

    /// Commit a new round: target pattern, freshly spawned pieces, and
    /// cleared outcome flags.
    ///
    /// Fails with `LengthMismatch` if the host spawned a piece count
    /// that diverges from the pattern length. Index alignment between
    /// the two is the invariant every later comparison relies on.
    pub fn begin_round(
        &mut self,
        level: RotationSet,
        pieces: Vec<PieceId>,
    ) -> Result<(), PuzzleError> {
        if pieces.len() != level.len() {
            return Err(PuzzleError::LengthMismatch {
                pieces: pieces.len(),
                level: level.len(),
            });
        }

        self.level = level;
        self.pieces = pieces;
        self.win = false;
        self.loose = false;
        Ok(())
    }

    // === Accessors ===

    /// Current target pattern.
    #[must_use]
    pub fn level(&self) -> &RotationSet {
        &self.level
    }

    /// Host piece handles, index-aligned with the level.
    #[must_use]
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    /// Has the current round been won?
    #[must_use]
    pub fn win(&self) -> bool {
        self.win
    }

    /// Has the current round been lost?
    #[must_use]
    pub fn loose(&self) -> bool {
        self.loose
    }

    /// Has the round reached a terminal outcome?
    #[must_use]
    pub fn resolved(&self) -> bool {
        self.win || self.loose
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Piece count used for the next generated level.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// Step counter within the current weight tier.
    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Configured countdown seconds.
    #[must_use]
    pub fn timer_secs(&self) -> u32 {
        self.timer_secs
    }

    // === Setters ===

    /// Set the win flag. Ignored once the round is resolved.
    pub fn set_win(&mut self, win: bool) {
        if self.resolved() {
            return;
        }
        self.win = win;
    }

    /// Set the lose flag. Ignored once the round is resolved.
    pub fn set_loose(&mut self, loose: bool) {
        if self.resolved() {
            return;
        }
        self.loose = loose;
    }

    /// Set the accumulated score.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Set the piece count for subsequently generated levels.
    ///
    /// Takes effect at the next round start; the committed level of an
    /// in-flight round is unaffected.
    pub fn set_weight(&mut self, weight: usize) {
        assert!(weight >= 1, "Puzzle must have at least 1 piece");
        self.weight = weight;
    }

    /// Set the step counter.
    pub fn set_step(&mut self, step: u32) {
        self.step = step;
    }

    /// Set the countdown duration for subsequent rounds.
    pub fn set_timer_secs(&mut self, timer_secs: u32) {
        assert!(timer_secs >= 1, "Countdown must run at least 1 second");
        self.timer_secs = timer_secs;
    }
}
