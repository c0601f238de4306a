//! The round state machine.
//!
//! A round runs `Idle → Active → {Won, Lost}`; the terminal states hold
//! until an external restart re-enters `Active`. The controller owns the
//! transitions, and the per-frame comparison work lives in a resumable
//! [`WinWatcher`] task the controller can cancel by dropping.

pub mod controller;
pub mod watcher;

pub use controller::{PuzzleController, RoundPhase};
pub use watcher::{WatchStatus, WinWatcher};
