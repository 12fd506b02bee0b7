//! Ladder: a high-throughput snakes-and-ladders simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all ladder sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use ladder::prelude::*;
//!
//! let mut builder = BoardBuilder::new(10).unwrap();
//! builder.add_jump(97, 78).unwrap();
//! builder.add_jump(1, 38).unwrap();
//! let board = Board::new(&builder.finalize().unwrap());
//!
//! let die = Die::seeded(6, 42).unwrap();
//! let mut dice = RollCache::new(Folded::new(die), CacheConfig::new(4096)).unwrap();
//!
//! let mut game = Game::new(&board, 3).unwrap();
//! while game.is_running() {
//!     game.apply_roll(dice.roll());
//! }
//! let winner = game.current_player();
//! assert_eq!(game.player_position(winner), board.end_position());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ladder-core` | Cell and player ids, `CompoundRoll`, `Roller` |
//! | [`dice`] | `ladder-dice` | `Die`, `Folded`, `RollCache` |
//! | [`board`] | `ladder-board` | `BoardBuilder`, `Board`, jump resolution |
//! | [`game`] | `ladder-game` | The turn state machine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, ids, and the [`Roller`](types::Roller) trait (`ladder-core`).
pub use ladder_core as types;

/// Dice, the upto-3 folder, and the roll cache (`ladder-dice`).
pub use ladder_dice as dice;

/// Board construction and jump resolution (`ladder-board`).
pub use ladder_board as board;

/// The game state machine (`ladder-game`).
pub use ladder_game as game;

/// Common imports for driving a simulation.
pub mod prelude {
    pub use ladder_board::{Board, BoardBuilder, BoardError, Jump, JumpResolution};
    pub use ladder_core::{CellId, CompoundRoll, Face, GameState, PlayerId, Roller};
    pub use ladder_dice::{fold_upto3, CacheConfig, Die, Folded, RollCache};
    pub use ladder_game::{Game, GameError};
}
