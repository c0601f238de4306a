//! Piece identification.
//!
//! The core never owns piece objects; the rendering host does. A
//! `PieceId` is the opaque handle the host returns when spawning a
//! round's pieces, used afterwards to query orientations and push
//! visual feedback. Index alignment is what carries meaning: the piece
//! at position `i` in the store corresponds to element `i` of the
//! target pattern.

use serde::{Deserialize, Serialize};

/// Opaque handle to a host-owned puzzle piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}
