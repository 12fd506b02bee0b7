//! Game construction errors.

use std::error::Error;
use std::fmt;

/// Errors from constructing a [`Game`](crate::Game).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Zero players, or more than a [`PlayerId`](ladder_core::PlayerId) can address.
    InvalidPlayerCount {
        /// The rejected player count.
        count: usize,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlayerCount { count } => {
                write!(
                    f,
                    "invalid player count {count}: must be in 1..={}",
                    crate::Game::MAX_PLAYERS
                )
            }
        }
    }
}

impl Error for GameError {}
