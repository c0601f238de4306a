//! Per-frame win watching as a resumable task.
//!
//! `WinWatcher` replaces a host-scheduler coroutine: a small value the
//! controller resumes once per frame and cancels by dropping. Each
//! resumption checks the flags in the order the concurrency contract
//! requires: a `loose` set by the countdown between two frames must be
//! observed before any stale win result. Only then does it compare the
//! live piece orientations against the target.

use crate::core::{GameStore, Rotation, RotationSet};
use crate::error::PuzzleError;
use crate::view::PieceView;

/// Outcome of one watcher resumption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchStatus {
    /// Round still undecided; resume again next frame.
    Continue,
    /// The win flag is set; the caller must run win actions and drop
    /// the watcher.
    Won,
    /// The lose flag is set; the loss was handled on the timeout path,
    /// the caller just drops the watcher.
    Cancelled,
}

/// Resumable comparison loop for one round.
#[derive(Clone, Debug, Default)]
pub struct WinWatcher {
    ticks: u64,
}

impl WinWatcher {
    /// Create a watcher for a fresh round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames this watcher has observed.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one comparison tick.
    ///
    /// A detected match sets `win` on the store but still returns
    /// `Continue`; the following resumption observes the flag and
    /// reports `Won`. This two-tick shape keeps the lose check strictly
    /// ahead of any win action, so a timeout landing between the two
    /// frames wins the race.
    pub fn resume(
        &mut self,
        store: &mut GameStore,
        pieces: &dyn PieceView,
    ) -> Result<WatchStatus, PuzzleError> {
        self.ticks += 1;

        if store.loose() {
            return Ok(WatchStatus::Cancelled);
        }
        if store.win() {
            return Ok(WatchStatus::Won);
        }

        let current = current_rotations(store, pieces)?;
        store.set_win(current == *store.level());
        Ok(WatchStatus::Continue)
    }
}

/// Read and validate every piece's current orientation, in piece order.
pub(crate) fn current_rotations(
    store: &GameStore,
    pieces: &dyn PieceView,
) -> Result<RotationSet, PuzzleError> {
    store
        .pieces()
        .iter()
        .map(|&piece| Rotation::from_degrees(pieces.orientation_degrees(piece)))
        .collect()
}
