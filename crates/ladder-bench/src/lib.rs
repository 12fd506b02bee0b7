//! Benchmark profiles and the trial driver for the ladder simulator.
//!
//! - [`classic_profile`]: the 10×10 board with fifteen jumps, three
//!   players and a six-sided die
//! - [`SimulationProfile`]: builds the board and cached dice for a profile
//! - [`run_trials`]: plays complete games back to back on one `Game`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::error::Error;
use std::fmt;

use ladder_board::{Board, BoardBuilder, BoardError, JumpResolution};
use ladder_core::{CellId, CompoundRoll, Face, Roller};
use ladder_dice::{CacheConfig, CacheError, DiceError, Die, Folded, RollCache};
use ladder_game::{Game, GameError};
use ladder_test_utils::{CLASSIC_JUMPS, CLASSIC_SIDE};

/// The dice stack used by every profile.
pub type CachedDice = RollCache<Folded<Die>>;

/// Everything needed to set up a benchmark run.
#[derive(Clone, Debug)]
pub struct SimulationProfile {
    /// Board side length.
    pub side: u8,
    /// Jumps as `(from, to)` pairs, in any order.
    pub jumps: Vec<(CellId, CellId)>,
    /// How landings on jump sources are resolved.
    pub resolution: JumpResolution,
    /// Number of players.
    pub players: usize,
    /// Faces on the die.
    pub dice_sides: Face,
    /// Seed for the die.
    pub seed: u64,
    /// Roll cache sizing.
    pub cache: CacheConfig,
}

/// The classic profile: 10×10 board, fifteen jumps, three players, d6.
pub fn classic_profile(seed: u64) -> SimulationProfile {
    SimulationProfile {
        side: CLASSIC_SIDE,
        jumps: CLASSIC_JUMPS.to_vec(),
        resolution: JumpResolution::Chase,
        players: 3,
        dice_sides: 6,
        seed,
        cache: CacheConfig::default(),
    }
}

impl SimulationProfile {
    /// Check every construction-time precondition without starting threads.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let board = self.build_board()?;
        Game::new(&board, self.players)?;
        Die::seeded(self.dice_sides, self.seed)?;
        self.cache.validate()?;
        Ok(())
    }

    /// Build and validate the board.
    pub fn build_board(&self) -> Result<Board, ProfileError> {
        let mut builder = BoardBuilder::new(self.side)?.resolution(self.resolution);
        for &(from, to) in &self.jumps {
            builder.add_jump(from, to)?;
        }
        Ok(Board::new(&builder.finalize()?))
    }

    /// Build the cached, folded dice. Starts the cache's fill thread.
    pub fn build_dice(&self) -> Result<CachedDice, ProfileError> {
        let die = Die::seeded(self.dice_sides, self.seed)?;
        Ok(RollCache::new(Folded::new(die), self.cache.clone())?)
    }
}

/// Errors detected while building a [`SimulationProfile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileError {
    /// The board was rejected.
    Board(BoardError),
    /// The die was rejected.
    Dice(DiceError),
    /// The roll cache was rejected.
    Cache(CacheError),
    /// The player count was rejected.
    Game(GameError),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(e) => write!(f, "board: {e}"),
            Self::Dice(e) => write!(f, "dice: {e}"),
            Self::Cache(e) => write!(f, "cache: {e}"),
            Self::Game(e) => write!(f, "game: {e}"),
        }
    }
}

impl Error for ProfileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            Self::Dice(e) => Some(e),
            Self::Cache(e) => Some(e),
            Self::Game(e) => Some(e),
        }
    }
}

impl From<BoardError> for ProfileError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl From<DiceError> for ProfileError {
    fn from(e: DiceError) -> Self {
        Self::Dice(e)
    }
}

impl From<CacheError> for ProfileError {
    fn from(e: CacheError) -> Self {
        Self::Cache(e)
    }
}

impl From<GameError> for ProfileError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

/// Outcome of a batch of complete games.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrialReport {
    /// Games played to completion.
    pub games: u64,
    /// Compound rolls consumed across all games.
    pub turns: u64,
    /// Wins per seat, indexed by player id.
    pub wins: Vec<u64>,
}

impl TrialReport {
    /// Mean compound rolls per game.
    pub fn mean_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.turns as f64 / self.games as f64
    }
}

/// Play `games` complete games on `game`, resetting between them.
pub fn run_trials<R>(game: &mut Game<'_>, dice: &mut R, games: u64) -> TrialReport
where
    R: Roller<Output = CompoundRoll>,
{
    let mut report = TrialReport {
        games,
        turns: 0,
        wins: vec![0; game.player_count()],
    };
    for _ in 0..games {
        game.reset();
        while game.is_running() {
            game.apply_roll(dice.roll());
            report.turns += 1;
        }
        report.wins[game.current_player().index()] += 1;
    }
    log::debug!("ran {games} games: {:.1} turns/game", report.mean_turns());
    report
}
