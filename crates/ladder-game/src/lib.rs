//! Turn-based game state machine for the ladder simulator.
//!
//! A [`Game`] borrows a [`Board`](ladder_board::Board) and tracks one
//! position per player, whose turn it is, and whether someone has won.
//! It is driven one compound roll at a time and is purely synchronous.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod game;

pub use error::GameError;
pub use game::Game;
