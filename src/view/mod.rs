//! Collaborator traits the rendering/UI host implements.
//!
//! Rendering, input, and layout are out of scope for this crate. The
//! engine talks to the host through these two seams: `PieceView` for
//! piece orientation and visual feedback, `TimerDisplay` for the
//! countdown widget. Tests drive the engine with scripted
//! implementations; a real host wraps its scene graph.

use crate::core::{PieceId, RotationSet};

/// Visual feedback state for one piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualState {
    /// No verdict yet (round in progress).
    #[default]
    Neutral,
    /// Piece matches its target rotation.
    Success,
    /// Piece does not match its target rotation.
    Error,
}

/// The host's piece collection.
///
/// Implementations own the actual piece objects. `reset_pieces` must
/// return exactly one handle per element of `target`, index-aligned
/// with it; the engine verifies the count and fails the round start on
/// a mismatch. The spawn orientation of fresh pieces is the host's
/// business (scrambled, neutral, whatever). If the host spawns them
/// already matching the target, the round simply resolves as an
/// immediate win.
pub trait PieceView {
    /// Tear down the previous round's pieces and spawn one per element
    /// of the new target pattern.
    fn reset_pieces(&mut self, target: &RotationSet) -> Vec<PieceId>;

    /// Current measured orientation of a piece, in degrees.
    ///
    /// Must report a member of the rotation domain; any other value is
    /// an integration defect the engine surfaces as
    /// `PuzzleError::InvalidOrientation`.
    fn orientation_degrees(&self, piece: PieceId) -> i32;

    /// Push a visual verdict onto a piece.
    fn set_visual_state(&mut self, piece: PieceId, state: VisualState);
}

/// The host's countdown widget.
///
/// Purely cosmetic; the engine only toggles visibility around round
/// activation.
pub trait TimerDisplay {
    /// Show the countdown widget.
    fn show_timer(&mut self);

    /// Hide the countdown widget.
    fn hide_timer(&mut self);
}
