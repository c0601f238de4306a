//! Error taxonomy for the puzzle core.
//!
//! Both variants indicate a broken invariant between the core and its
//! host collaborators, not a recoverable game condition. Callers should
//! surface them immediately rather than retry: a piece reporting an
//! angle outside the rotation domain, or a host spawning the wrong
//! number of pieces, means the integration itself is wrong.

use thiserror::Error;

/// Failures at the boundary between the puzzle core and its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// A measured piece angle does not correspond to any valid rotation.
    #[error("orientation {degrees}° does not map to a valid rotation")]
    InvalidOrientation {
        /// The offending measured angle, in degrees.
        degrees: i32,
    },

    /// The host produced a piece count that diverges from the target
    /// pattern length, breaking index alignment.
    #[error("piece count {pieces} does not match level length {level}")]
    LengthMismatch {
        /// Number of pieces the host spawned.
        pieces: usize,
        /// Length of the committed target pattern.
        level: usize,
    },
}
