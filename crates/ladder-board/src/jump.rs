//! Jumps (ladders and snakes) and how landing on them is resolved.

use std::fmt;

use ladder_core::{CellId, CellOffset};

/// A ladder (`to > from`) or snake (`to < from`) between two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Jump {
    /// Cell the jump starts on.
    pub from: CellId,
    /// Cell the jump ends on.
    pub to: CellId,
}

impl Jump {
    /// Create an unvalidated jump. Validation happens in the builder.
    pub const fn new(from: CellId, to: CellId) -> Self {
        Self { from, to }
    }

    /// Signed length: positive for ladders, negative for snakes.
    pub fn offset(self) -> CellOffset {
        (i32::from(self.to) - i32::from(self.from)) as CellOffset
    }

    /// `true` for a forward jump.
    pub fn is_ladder(self) -> bool {
        self.to > self.from
    }

    /// `true` for a backward jump.
    pub fn is_snake(self) -> bool {
        self.to < self.from
    }
}

impl From<(CellId, CellId)> for Jump {
    fn from((from, to): (CellId, CellId)) -> Self {
        Self::new(from, to)
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// How a landing on a jump source is resolved.
///
/// On boards that pass the default validation no jump lands on another
/// jump's source, so both modes give identical results. They only differ
/// on boards built with [`BoardBuilder::allow_chains`](crate::BoardBuilder::allow_chains).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum JumpResolution {
    /// Keep following jumps until landing on an ordinary cell.
    #[default]
    Chase,
    /// Follow only the jump landed on, even if it ends on another source.
    Single,
}

impl fmt::Display for JumpResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chase => write!(f, "chase"),
            Self::Single => write!(f, "single"),
        }
    }
}
