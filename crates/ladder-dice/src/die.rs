//! A plain n-sided die.

use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ladder_core::{Face, Roller, MAX_FACE};

use crate::error::DiceError;

/// A uniform die over `[1, sides]`.
///
/// Backed by ChaCha8 so that [`Die::seeded`] reproduces the same face
/// sequence on every platform. `sides` is fixed for the die's lifetime.
#[derive(Clone, Debug)]
pub struct Die {
    sides: Face,
    faces: Uniform<Face>,
    rng: ChaCha8Rng,
}

impl Die {
    /// Smallest accepted side count.
    pub const MIN_SIDES: Face = 2;

    /// Largest accepted side count.
    pub const MAX_SIDES: Face = MAX_FACE;

    /// Create a die seeded from OS entropy.
    pub fn new(sides: Face) -> Result<Self, DiceError> {
        Self::with_rng(sides, ChaCha8Rng::from_entropy())
    }

    /// Create a die with a reproducible face sequence.
    pub fn seeded(sides: Face, seed: u64) -> Result<Self, DiceError> {
        Self::with_rng(sides, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(sides: Face, rng: ChaCha8Rng) -> Result<Self, DiceError> {
        if !(Self::MIN_SIDES..=Self::MAX_SIDES).contains(&sides) {
            return Err(DiceError::InvalidSides { sides });
        }
        Ok(Self {
            sides,
            faces: Uniform::new_inclusive(1, sides),
            rng,
        })
    }
}

impl Roller for Die {
    type Output = Face;

    #[inline]
    fn roll(&mut self) -> Face {
        self.faces.sample(&mut self.rng)
    }

    #[inline]
    fn sides(&self) -> Face {
        self.sides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn side_count_bounds() {
        assert_eq!(Die::new(0).unwrap_err(), DiceError::InvalidSides { sides: 0 });
        assert_eq!(Die::new(1).unwrap_err(), DiceError::InvalidSides { sides: 1 });
        assert_eq!(Die::new(128).unwrap_err(), DiceError::InvalidSides { sides: 128 });
        assert!(Die::new(2).is_ok());
        assert!(Die::new(127).is_ok());
    }

    #[test]
    fn same_seed_same_faces() {
        let mut a = Die::seeded(6, 42).unwrap();
        let mut b = Die::seeded(6, 42).unwrap();
        let xs: Vec<Face> = (0..256).map(|_| a.roll()).collect();
        let ys: Vec<Face> = (0..256).map(|_| b.roll()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn every_face_appears() {
        let mut die = Die::seeded(6, 3).unwrap();
        let mut seen = [0u32; 7];
        for _ in 0..6000 {
            seen[die.roll() as usize] += 1;
        }
        assert_eq!(seen[0], 0);
        for (face, &count) in seen.iter().enumerate().skip(1) {
            // Expected 1000 per face; 6-sigma is roughly +/- 175.
            assert!((800..1200).contains(&count), "face {face} seen {count} times");
        }
    }

    proptest! {
        #[test]
        fn faces_stay_in_range(sides in 2u8..=127, seed in any::<u64>()) {
            let mut die = Die::seeded(sides, seed).unwrap();
            prop_assert_eq!(die.sides(), sides);
            for _ in 0..64 {
                let face = die.roll();
                prop_assert!((1..=sides).contains(&face));
            }
        }
    }
}
