//! The upto-3 roll folder.
//!
//! Rolling the maximum face earns another roll, up to three rolls in
//! total. Three maximum faces in a row void the whole turn. This is a
//! game rule, not an error: the voided turn is reported as
//! [`CompoundRoll::VOID`].

use ladder_core::{CompoundRoll, Face, Roller};

/// Fold up to three rolls of `die` into one compound roll.
///
/// - `r0 != sides` gives `(r0, 0, 0)`
/// - `r1 != sides` gives `(r0, r1, 0)`
/// - `r2 != sides` gives `(r0, r1, r2)`
/// - otherwise `(0, 0, 0)`
#[inline]
pub fn fold_upto3<R>(die: &mut R) -> CompoundRoll
where
    R: Roller<Output = Face> + ?Sized,
{
    let max = die.sides();

    let r0 = die.roll();
    if r0 != max {
        return CompoundRoll::new(r0, 0, 0);
    }

    let r1 = die.roll();
    if r1 != max {
        return CompoundRoll::new(r0, r1, 0);
    }

    let r2 = die.roll();
    if r2 != max {
        return CompoundRoll::new(r0, r1, r2);
    }

    CompoundRoll::VOID
}

/// A [`Roller`] that applies [`fold_upto3`] to the die it wraps.
#[derive(Clone, Debug)]
pub struct Folded<R> {
    inner: R,
}

impl<R> Folded<R>
where
    R: Roller<Output = Face>,
{
    /// Wrap a face-producing roller.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Recover the wrapped roller.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Roller for Folded<R>
where
    R: Roller<Output = Face>,
{
    type Output = CompoundRoll;

    #[inline]
    fn roll(&mut self) -> CompoundRoll {
        fold_upto3(&mut self.inner)
    }

    #[inline]
    fn sides(&self) -> Face {
        self.inner.sides()
    }
}
