//! Game lifecycle flag.

/// Whether a game is still accepting moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Players are still taking turns.
    #[default]
    Running,
    /// A player has landed exactly on the final cell.
    Finished,
}

impl GameState {
    /// `true` while the game is [`GameState::Running`].
    #[inline]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}
