//! Rotation values and target patterns.
//!
//! A puzzle piece holds one of four cardinal orientations. A whole
//! puzzle configuration is a `RotationSet`: an ordered sequence with one
//! rotation per piece, where the index encodes piece identity. Two sets
//! are equal iff they have the same length and match at every position.
//!
//! Measured angles come from the host as raw degrees and must map
//! exactly onto a `Rotation`; anything else is an integration defect and
//! fails with [`PuzzleError::InvalidOrientation`] instead of being cast
//! unchecked.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::PuzzleError;

/// One discrete valid orientation a puzzle piece may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// 0 degrees.
    Deg0,
    /// 90 degrees.
    Deg90,
    /// 180 degrees.
    Deg180,
    /// 270 degrees.
    Deg270,
}

impl Rotation {
    /// Every valid rotation, in ascending degree order.
    pub const DOMAIN: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Validated conversion from a measured angle.
    ///
    /// Returns `InvalidOrientation` for any angle outside the domain,
    /// including otherwise-reasonable values like `360` or `-90`. Pieces
    /// snap to exact cardinal angles, so a non-member means the host's
    /// orientation report is broken, not merely unnormalized.
    pub fn from_degrees(degrees: i32) -> Result<Self, PuzzleError> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            _ => Err(PuzzleError::InvalidOrientation { degrees }),
        }
    }

    /// The angle this rotation represents, in degrees.
    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// An ordered sequence of rotations describing an entire puzzle
/// configuration, one per piece by index.
///
/// Immutable once constructed. Equality is derived: same length and
/// equal value at every position. Two empty sets are equal; an empty
/// set is the "not yet generated" sentinel at session start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationSet(SmallVec<[Rotation; 8]>);

impl RotationSet {
    /// Create a set from anything yielding rotations.
    pub fn new(rotations: impl IntoIterator<Item = Rotation>) -> Self {
        Self(rotations.into_iter().collect())
    }

    /// The empty sentinel set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set by validating a slice of measured angles.
    ///
    /// Fails on the first angle outside the rotation domain.
    pub fn from_degrees(degrees: &[i32]) -> Result<Self, PuzzleError> {
        degrees.iter().map(|&d| Rotation::from_degrees(d)).collect()
    }

    /// Number of pieces this pattern describes (the puzzle "weight").
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the "not yet generated" sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rotation at a piece index, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rotation> {
        self.0.get(index).copied()
    }

    /// Iterate the rotations in piece order.
    pub fn iter(&self) -> impl Iterator<Item = Rotation> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Rotation> for RotationSet {
    fn from_iter<I: IntoIterator<Item = Rotation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::ops::Index<usize> for RotationSet {
    type Output = Rotation;

    fn index(&self, index: usize) -> &Rotation {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees_valid() {
        assert_eq!(Rotation::from_degrees(0), Ok(Rotation::Deg0));
        assert_eq!(Rotation::from_degrees(90), Ok(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(180), Ok(Rotation::Deg180));
        assert_eq!(Rotation::from_degrees(270), Ok(Rotation::Deg270));
    }

    #[test]
    fn test_from_degrees_invalid() {
        for degrees in [45, 360, -90, 91, 1] {
            assert_eq!(
                Rotation::from_degrees(degrees),
                Err(PuzzleError::InvalidOrientation { degrees })
            );
        }
    }

    #[test]
    fn test_degrees_round_trip() {
        for rotation in Rotation::DOMAIN {
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Ok(rotation));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rotation::Deg90), "90°");
    }

    #[test]
    fn test_set_equality_elementwise() {
        let a = RotationSet::new([Rotation::Deg0, Rotation::Deg90]);
        let b = RotationSet::new([Rotation::Deg0, Rotation::Deg90]);
        let c = RotationSet::new([Rotation::Deg90, Rotation::Deg0]);

        assert_eq!(a, b);
        // Order matters: index encodes piece identity.
        assert_ne!(a, c);
    }

    #[test]
    fn test_set_equality_length() {
        let a = RotationSet::new([Rotation::Deg0]);
        let b = RotationSet::new([Rotation::Deg0, Rotation::Deg0]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_sets_equal() {
        assert_eq!(RotationSet::empty(), RotationSet::empty());
        assert!(RotationSet::empty().is_empty());
    }

    #[test]
    fn test_set_from_degrees() {
        let set = RotationSet::from_degrees(&[0, 270, 180]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(1), Some(Rotation::Deg270));
        assert_eq!(set[2], Rotation::Deg180);
        assert_eq!(set.get(3), None);

        assert_eq!(
            RotationSet::from_degrees(&[0, 45]),
            Err(PuzzleError::InvalidOrientation { degrees: 45 })
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let set = RotationSet::from_degrees(&[90, 0, 270]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        let deserialized: RotationSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, deserialized);
    }
}
