//! Strongly-typed identifiers and the numeric aliases used on the hot path.

use std::fmt;

/// Index of a cell on the board. `0` is the start cell, `side²` the finish.
pub type CellId = u16;

/// Signed distance between two cells. Positive for ladders, negative for snakes.
pub type CellOffset = i16;

/// A single raw die face. `0` is reserved as the "step not taken" placeholder.
pub type Face = u8;

/// Largest number of sides a die may have.
///
/// Keeps every face representable as a narrow signed byte.
pub const MAX_FACE: Face = 127;

/// Identifies a player within a game.
///
/// Players are numbered `0..player_count` in turn order. Removing a player
/// renumbers the survivors; see `Game::remove_player`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player id as a slice index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for PlayerId {
    fn from(v: u8) -> Self {
        Self(v)
    }
}
