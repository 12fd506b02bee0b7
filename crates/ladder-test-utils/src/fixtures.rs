//! The classic 10×10 board with fifteen jumps.

use ladder_board::{Board, BoardBuilder};
use ladder_core::CellId;

/// Side length of the classic board.
pub const CLASSIC_SIDE: u8 = 10;

/// Jumps of the classic board, in the order they are usually listed.
pub const CLASSIC_JUMPS: [(CellId, CellId); 15] = [
    (97, 78),
    (94, 74),
    (92, 72),
    (86, 23),
    (79, 99),
    (70, 90),
    (63, 59),
    (61, 18),
    (53, 33),
    (50, 66),
    (20, 41),
    (16, 6),
    (8, 30),
    (3, 14),
    (1, 38),
];

/// A builder loaded with [`CLASSIC_JUMPS`], not yet finalized.
pub fn classic_builder() -> BoardBuilder {
    let mut builder = BoardBuilder::new(CLASSIC_SIDE).unwrap();
    for (from, to) in CLASSIC_JUMPS {
        builder.add_jump(from, to).unwrap();
    }
    builder
}

/// The classic board, built.
pub fn classic_board() -> Board {
    Board::new(&classic_builder().finalize().unwrap())
}
