//! Dice for the ladder simulator.
//!
//! Three independent [`Roller`](ladder_core::Roller) implementations that
//! compose by wrapping:
//!
//! ```text
//! RollCache<Folded<Die>>
//! ├── RollCache  double-buffered, refilled on a background thread
//! │   └── Folded  upto-3 rule: reroll on max face, void on the third
//! │       └── Die  uniform faces in [1, sides], seeded ChaCha8
//! ```
//!
//! The cache is the only concurrency boundary in the workspace. The
//! consumer reads its active buffer without synchronisation; the producer
//! thread only ever touches the standby buffer, and buffers change hands
//! over a pair of bounded channels at the swap.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod config;
pub mod die;
pub mod error;
pub mod fold;

pub use cache::{CacheStats, RollCache};
pub use config::CacheConfig;
pub use die::Die;
pub use error::{CacheError, DiceError};
pub use fold::{fold_upto3, Folded};
