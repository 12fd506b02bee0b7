//! Board construction and jump resolution for the ladder simulator.
//!
//! A board is built in three stages:
//!
//! ```text
//! BoardBuilder ──add_jump()──▶ per-jump validation
//!      │
//!   finalize() ──▶ FinalizedBoard   sorted, cross-jump validated
//!      │
//!   Board::new() ──▶ Board          immutable arena + automaton
//! ```
//!
//! The [`Board`] holds one signed offset per cell (`side² + 1` cells,
//! `0..=side²`). An offset of zero is an ordinary cell; a positive offset
//! is a ladder, a negative one a snake. [`Board::advance`] is a pure
//! function of the arena and its arguments.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod builder;
pub mod error;
pub mod jump;

pub use board::Board;
pub use builder::{BoardBuilder, FinalizedBoard};
pub use error::BoardError;
pub use jump::{Jump, JumpResolution};
