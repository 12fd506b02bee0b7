//! Board construction errors.

use std::error::Error;
use std::fmt;

use ladder_core::CellId;

use crate::jump::Jump;

/// Precondition violations detected while building a board.
///
/// These only occur at construction. A [`Board`](crate::Board) that was
/// built successfully cannot fail during simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Side length outside `2..=127`.
    InvalidSide {
        /// The rejected side length.
        side: u8,
    },
    /// A jump endpoint is not a cell a jump may touch (`0..side²`).
    CellOutOfRange {
        /// The offending cell.
        cell: CellId,
        /// Exclusive upper bound for jump endpoints.
        limit: CellId,
    },
    /// A jump shorter than two cells.
    JumpTooShort {
        /// Jump source.
        from: CellId,
        /// Jump destination.
        to: CellId,
    },
    /// A ladder sourced at the start cell.
    LadderAtStart {
        /// Ladder destination.
        to: CellId,
    },
    /// A snake sourced at the last cell a jump may touch.
    SnakeAtEnd {
        /// Snake destination.
        to: CellId,
    },
    /// One jump lands on another jump's source.
    ChainedJumps {
        /// The jump whose destination is a source.
        first: Jump,
        /// The jump sourced at `first.to`.
        second: Jump,
    },
    /// Two jumps share a source cell.
    DuplicateSource {
        /// The shared source.
        cell: CellId,
    },
    /// Chained jumps that loop back on themselves.
    CyclicJumps {
        /// A cell on the cycle.
        cell: CellId,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSide { side } => {
                write!(f, "invalid board side {side}: must be in 2..=127")
            }
            Self::CellOutOfRange { cell, limit } => {
                write!(f, "jump endpoint {cell} out of range 0..{limit}")
            }
            Self::JumpTooShort { from, to } => {
                write!(f, "jump {from} -> {to} is shorter than two cells")
            }
            Self::LadderAtStart { to } => write!(f, "ladder at start cell (0 -> {to})"),
            Self::SnakeAtEnd { to } => write!(f, "snake at end cell (to {to})"),
            Self::ChainedJumps { first, second } => {
                write!(f, "chained jumps: {first} lands on {second}")
            }
            Self::DuplicateSource { cell } => {
                write!(f, "more than one jump starts at cell {cell}")
            }
            Self::CyclicJumps { cell } => write!(f, "jump chain through cell {cell} loops"),
        }
    }
}

impl Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_message_shows_both_jumps() {
        let e = BoardError::ChainedJumps {
            first: Jump::new(3, 14),
            second: Jump::new(14, 40),
        };
        assert_eq!(e.to_string(), "chained jumps: 3 -> 14 lands on 14 -> 40");
    }
}
