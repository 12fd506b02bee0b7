//! The dice capability trait.

use crate::id::Face;

/// A source of rolls.
///
/// Implementations compose by wrapping: a plain die yields single faces,
/// a folder turns faces into compound rolls, a cache buffers whatever the
/// wrapped roller produces. Consumers only ever see `roll()` and `sides()`.
pub trait Roller {
    /// The value produced by a single call to [`roll`](Roller::roll).
    type Output: Copy;

    /// Produce the next value. Advances internal state.
    fn roll(&mut self) -> Self::Output;

    /// Number of faces on the underlying die.
    fn sides(&self) -> Face;
}

impl<R: Roller + ?Sized> Roller for &mut R {
    type Output = R::Output;

    #[inline]
    fn roll(&mut self) -> Self::Output {
        (**self).roll()
    }

    #[inline]
    fn sides(&self) -> Face {
        (**self).sides()
    }
}

impl<R: Roller + ?Sized> Roller for Box<R> {
    type Output = R::Output;

    #[inline]
    fn roll(&mut self) -> Self::Output {
        (**self).roll()
    }

    #[inline]
    fn sides(&self) -> Face {
        (**self).sides()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        next: Face,
    }

    impl Roller for Counter {
        type Output = Face;

        fn roll(&mut self) -> Face {
            self.next += 1;
            self.next
        }

        fn sides(&self) -> Face {
            6
        }
    }

    fn draw_two<R: Roller>(mut r: R) -> (R::Output, R::Output) {
        (r.roll(), r.roll())
    }

    #[test]
    fn mutable_reference_forwards_state() {
        let mut counter = Counter { next: 0 };
        assert_eq!(draw_two(&mut counter), (1, 2));
        assert_eq!(counter.roll(), 3);
    }

    #[test]
    fn boxed_roller_forwards_sides() {
        let boxed: Box<dyn Roller<Output = Face>> = Box::new(Counter { next: 0 });
        assert_eq!(boxed.sides(), 6);
    }
}
