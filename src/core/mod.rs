//! Core puzzle types: rotations, pieces, round state, RNG, configuration.
//!
//! This module contains the value types the rest of the engine is built
//! on. Hosts configure a round via `RoundConfig` rather than reaching
//! into the core.

pub mod config;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod store;

pub use config::RoundConfig;
pub use piece::PieceId;
pub use rng::PuzzleRng;
pub use rotation::{Rotation, RotationSet};
pub use store::GameStore;
