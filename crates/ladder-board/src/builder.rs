//! Board builder and the finalized parameter set it produces.

use ladder_core::CellId;

use crate::error::BoardError;
use crate::jump::{Jump, JumpResolution};

/// Accumulates jumps for a square board of `side × side` cells.
///
/// Each [`add_jump`](Self::add_jump) is validated on its own; checks that
/// involve more than one jump run in [`finalize`](Self::finalize).
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    side: u8,
    jumps: Vec<Jump>,
    allow_chains: bool,
    resolution: JumpResolution,
}

impl BoardBuilder {
    /// Smallest accepted side length.
    pub const MIN_SIDE: u8 = 2;

    /// Largest accepted side length. Keeps `side²` within a signed 16-bit offset.
    pub const MAX_SIDE: u8 = 127;

    /// Start a board with the given side length.
    pub fn new(side: u8) -> Result<Self, BoardError> {
        if !(Self::MIN_SIDE..=Self::MAX_SIDE).contains(&side) {
            return Err(BoardError::InvalidSide { side });
        }
        Ok(Self {
            side,
            jumps: Vec::new(),
            allow_chains: false,
            resolution: JumpResolution::default(),
        })
    }

    /// Side length of the board.
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Jumps added so far, in insertion order.
    pub fn jumps(&self) -> &[Jump] {
        &self.jumps
    }

    /// Exclusive bound on jump endpoints: `side²`.
    fn limit(&self) -> CellId {
        CellId::from(self.side) * CellId::from(self.side)
    }

    /// Validate and record a jump.
    ///
    /// Rejects endpoints outside `0..side²`, jumps shorter than two cells,
    /// ladders from cell `0`, and snakes from cell `side² - 1`.
    pub fn add_jump(&mut self, from: CellId, to: CellId) -> Result<&mut Self, BoardError> {
        let limit = self.limit();
        for cell in [from, to] {
            if cell >= limit {
                return Err(BoardError::CellOutOfRange { cell, limit });
            }
        }
        let jump = Jump::new(from, to);
        if jump.offset().unsigned_abs() < 2 {
            return Err(BoardError::JumpTooShort { from, to });
        }
        if jump.is_ladder() && from == 0 {
            return Err(BoardError::LadderAtStart { to });
        }
        if jump.is_snake() && from == limit - 1 {
            return Err(BoardError::SnakeAtEnd { to });
        }
        self.jumps.push(jump);
        Ok(self)
    }

    /// By-value form of [`add_jump`](Self::add_jump) for fluent construction.
    pub fn with_jump(mut self, from: CellId, to: CellId) -> Result<Self, BoardError> {
        self.add_jump(from, to)?;
        Ok(self)
    }

    /// Permit a jump to land on another jump's source.
    ///
    /// Cycles and shared sources are still rejected at
    /// [`finalize`](Self::finalize).
    pub fn allow_chains(mut self, allow: bool) -> Self {
        self.allow_chains = allow;
        self
    }

    /// Select how landings on jump sources are resolved.
    pub fn resolution(mut self, resolution: JumpResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sort jumps by source and run the cross-jump checks.
    pub fn finalize(mut self) -> Result<FinalizedBoard, BoardError> {
        self.jumps.sort_unstable();

        if let Some(pair) = self.jumps.windows(2).find(|w| w[0].from == w[1].from) {
            return Err(BoardError::DuplicateSource { cell: pair[0].from });
        }

        let source_at = |cell: CellId| -> Option<Jump> {
            self.jumps
                .binary_search_by_key(&cell, |j| j.from)
                .ok()
                .map(|i| self.jumps[i])
        };

        for &first in &self.jumps {
            let Some(second) = source_at(first.to) else {
                continue;
            };
            if !self.allow_chains {
                return Err(BoardError::ChainedJumps { first, second });
            }
            // Every hop consumes a distinct jump unless the chain loops.
            let mut cell = first.to;
            let mut hops = 0;
            while let Some(next) = source_at(cell) {
                hops += 1;
                if hops > self.jumps.len() {
                    return Err(BoardError::CyclicJumps { cell: first.from });
                }
                cell = next.to;
            }
        }

        log::debug!(
            "board finalized: side={}, jumps={}, resolution={}",
            self.side,
            self.jumps.len(),
            self.resolution
        );

        Ok(FinalizedBoard {
            side: self.side,
            jumps: self.jumps,
            resolution: self.resolution,
        })
    }
}

/// A validated, source-sorted jump list ready for [`Board`](crate::Board)
/// construction. Immutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalizedBoard {
    side: u8,
    jumps: Vec<Jump>,
    resolution: JumpResolution,
}

impl FinalizedBoard {
    /// Side length of the board.
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Jumps sorted by source cell.
    pub fn jumps(&self) -> &[Jump] {
        &self.jumps
    }

    /// How landings on jump sources will be resolved.
    pub fn resolution(&self) -> JumpResolution {
        self.resolution
    }

    /// The finishing cell, `side²`.
    pub fn end_position(&self) -> CellId {
        CellId::from(self.side) * CellId::from(self.side)
    }
}
