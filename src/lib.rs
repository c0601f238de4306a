//! # trispin
//!
//! A rotation-puzzle rule engine with timed rounds.
//!
//! The playable puzzle is simple: a board of pieces, each holding one of
//! four cardinal orientations, must be rotated to match a randomly
//! generated target pattern before a countdown expires. This crate owns
//! the rules (level generation, win/lose detection, and the timeout
//! contract) and leaves rendering, input, and UI layout to a host that
//! implements the collaborator traits in [`view`].
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: No globals. [`GameStore`] is owned by the
//!    session and passed by `&mut` to whoever mutates it.
//!
//! 2. **Explicit scheduling**: No hidden coroutines. The host drives
//!    three tick sources (one per frame, one per second, one per fixed
//!    simulation step) and every loop is a resumable value that makes
//!    progress when ticked.
//!
//! 3. **Deterministic randomness**: Level generation runs on a seeded
//!    [`PuzzleRng`], so a round can be reproduced exactly.
//!
//! ## Modules
//!
//! - `core`: Rotations, the game store, RNG, configuration
//! - `events`: Publish/subscribe channel for round notifications
//! - `generator`: Random target-pattern generation
//! - `round`: The round state machine (win watch, timeout handling)
//! - `timer`: Countdown and radial-fill contract
//! - `view`: Traits the rendering/UI host implements
//! - `session`: Top-level assembly wiring the pieces together

pub mod core;
pub mod error;
pub mod events;
pub mod generator;
pub mod round;
pub mod session;
pub mod timer;
pub mod view;

// Re-export commonly used types
pub use crate::core::{GameStore, PieceId, PuzzleRng, Rotation, RotationSet, RoundConfig};

pub use crate::error::PuzzleError;

pub use crate::events::{EventBus, GameEvent, SubscriptionId};

pub use crate::generator::LevelGenerator;

pub use crate::round::{PuzzleController, RoundPhase, WatchStatus, WinWatcher};

pub use crate::session::GameSession;

pub use crate::timer::TimerService;

pub use crate::view::{PieceView, TimerDisplay, VisualState};
