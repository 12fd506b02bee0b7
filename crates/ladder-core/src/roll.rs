//! The compound roll produced by the upto-3 reroll rule.

use std::fmt;

use crate::id::Face;

/// Up to three raw die faces, in the order they were rolled.
///
/// A `0` is a placeholder meaning "step not taken". Placeholders are
/// always trailing: a `0` at position `k` implies `0` at every later
/// position. The all-zero roll ([`CompoundRoll::VOID`]) is the special
/// case where three consecutive maximum faces voided the whole turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompoundRoll([Face; 3]);

impl CompoundRoll {
    /// The voided turn: nobody moves.
    pub const VOID: Self = Self([0, 0, 0]);

    /// Build a roll from raw faces without checking the placeholder layout.
    ///
    /// The caller must ensure zeros are trailing. Checked in debug builds.
    #[inline]
    pub fn new(first: Face, second: Face, third: Face) -> Self {
        let roll = Self([first, second, third]);
        debug_assert!(roll.is_well_formed(), "non-trailing placeholder in {roll:?}");
        roll
    }

    /// Build a roll from raw faces, rejecting a non-trailing placeholder.
    pub fn from_faces(faces: [Face; 3]) -> Option<Self> {
        let roll = Self(faces);
        roll.is_well_formed().then_some(roll)
    }

    /// The raw faces, placeholders included.
    #[inline]
    pub const fn faces(self) -> [Face; 3] {
        self.0
    }

    /// `true` for the all-zero voided turn.
    #[inline]
    pub fn is_void(self) -> bool {
        self == Self::VOID
    }

    /// Number of steps actually taken (non-placeholder faces).
    pub fn len(self) -> usize {
        self.0.iter().take_while(|&&f| f != 0).count()
    }

    /// `true` when no step is taken; equivalent to [`is_void`](Self::is_void).
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The faces that are real steps, in roll order.
    pub fn steps(self) -> impl Iterator<Item = Face> {
        self.0.into_iter().take_while(|&f| f != 0)
    }

    /// Sum of all taken steps.
    pub fn total(self) -> u16 {
        self.steps().map(u16::from).sum()
    }

    /// Largest face in the roll. Zero for a voided turn.
    pub fn max_face(self) -> Face {
        self.0.into_iter().max().unwrap_or(0)
    }

    fn is_well_formed(self) -> bool {
        let [a, b, c] = self.0;
        !((a == 0 && b != 0) || (b == 0 && c != 0))
    }
}

impl From<CompoundRoll> for [Face; 3] {
    fn from(roll: CompoundRoll) -> Self {
        roll.0
    }
}

impl fmt::Display for CompoundRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({a}, {b}, {c})")
    }
}
