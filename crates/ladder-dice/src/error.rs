//! Dice and cache construction errors.

use std::error::Error;
use std::fmt;

use ladder_core::Face;

/// Errors from constructing a [`Die`](crate::Die).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiceError {
    /// The side count is outside `2..=127`.
    InvalidSides {
        /// The rejected side count.
        sides: Face,
    },
}

impl fmt::Display for DiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSides { sides } => {
                write!(f, "invalid side count {sides}: a die needs 2..=127 sides")
            }
        }
    }
}

impl Error for DiceError {}

/// Errors from constructing a [`RollCache`](crate::RollCache).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// A buffer capacity of zero was requested.
    ZeroCapacity,
    /// The background fill thread could not be started.
    SpawnFailed {
        /// The OS error, rendered.
        reason: String,
    },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "roll cache capacity must be non-zero"),
            Self::SpawnFailed { reason } => {
                write!(f, "failed to spawn roll fill thread: {reason}")
            }
        }
    }
}

impl Error for CacheError {}
