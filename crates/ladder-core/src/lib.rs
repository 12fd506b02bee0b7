//! Core types and traits for the ladder board-game simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: cell and player
//! identifiers, the compound roll produced by the upto-3 rule, the game
//! state flag, and the [`Roller`] capability trait that every dice
//! implementation (plain, folded, cached) exposes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod roll;
pub mod state;
pub mod traits;

pub use id::{CellId, CellOffset, Face, PlayerId, MAX_FACE};
pub use roll::CompoundRoll;
pub use state::GameState;
pub use traits::Roller;
