//! Test utilities for ladder development.
//!
//! Provides a [`ScriptedRoller`] that replays canned faces, and fixtures
//! for the classic 10×10 board used by the throughput benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{classic_board, classic_builder, CLASSIC_JUMPS, CLASSIC_SIDE};

use ladder_core::{Face, Roller};

/// A [`Roller`] that replays a fixed list of faces.
///
/// Panics with "script exhausted" when a non-cycling script runs out,
/// which lets tests assert exactly how many faces were consumed.
#[derive(Clone, Debug)]
pub struct ScriptedRoller {
    sides: Face,
    script: Vec<Face>,
    cycle: bool,
    rolled: usize,
}

impl ScriptedRoller {
    /// Replay `script` once.
    pub fn new(sides: Face, script: &[Face]) -> Self {
        Self {
            sides,
            script: script.to_vec(),
            cycle: false,
            rolled: 0,
        }
    }

    /// Replay `script` forever.
    pub fn cycling(sides: Face, script: &[Face]) -> Self {
        assert!(!script.is_empty(), "cycling script must not be empty");
        Self {
            cycle: true,
            ..Self::new(sides, script)
        }
    }

    /// Faces consumed so far.
    pub fn rolled(&self) -> usize {
        self.rolled
    }
}

impl Roller for ScriptedRoller {
    type Output = Face;

    fn roll(&mut self) -> Face {
        let index = if self.cycle {
            self.rolled % self.script.len()
        } else {
            self.rolled
        };
        let Some(&face) = self.script.get(index) else {
            panic!("script exhausted after {} faces", self.rolled);
        };
        self.rolled += 1;
        face
    }

    fn sides(&self) -> Face {
        self.sides
    }
}
