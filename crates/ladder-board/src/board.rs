//! The immutable board arena and its jump-resolution automaton.

use ladder_core::{CellId, CellOffset, Face};

use crate::builder::FinalizedBoard;
use crate::jump::JumpResolution;

/// A built board: one offset per cell plus the resolution mode.
///
/// # Arena layout
///
/// ```text
/// index:   0    1    2   ...  side²-1  side²
/// offset:  0  +37    0   ...     0       0
///          │    └── ladder 1 -> 38
///          └── start                   finish
/// ```
///
/// Built once and never mutated. Games borrow it; any number of games
/// may share one board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    arena: Box<[CellOffset]>,
    side: u8,
    resolution: JumpResolution,
}

impl Board {
    /// Build the arena from a finalized parameter set.
    pub fn new(params: &FinalizedBoard) -> Self {
        let end = usize::from(params.end_position());
        let mut arena = vec![0 as CellOffset; end + 1];
        for jump in params.jumps() {
            arena[usize::from(jump.from)] = jump.offset();
        }
        Self {
            arena: arena.into_boxed_slice(),
            side: params.side(),
            resolution: params.resolution(),
        }
    }

    /// Side length the board was built with.
    pub fn side(&self) -> u8 {
        self.side
    }

    /// How landings on jump sources are resolved.
    pub fn resolution(&self) -> JumpResolution {
        self.resolution
    }

    /// The start cell. Always `0`.
    #[inline]
    pub const fn start_position(&self) -> CellId {
        0
    }

    /// The finishing cell, `side²`.
    #[inline]
    pub fn end_position(&self) -> CellId {
        (self.arena.len() - 1) as CellId
    }

    /// Number of cells including start and finish (`side² + 1`).
    pub fn cell_count(&self) -> usize {
        self.arena.len()
    }

    /// The per-cell offsets.
    pub fn arena(&self) -> &[CellOffset] {
        &self.arena
    }

    /// Offset stored at `cell`. Zero for ordinary cells.
    ///
    /// # Panics
    ///
    /// If `cell` is past the finish.
    #[inline]
    pub fn offset(&self, cell: CellId) -> CellOffset {
        self.arena[usize::from(cell)]
    }

    /// `true` if `cell` is the source of a ladder or snake.
    #[inline]
    pub fn is_jump_cell(&self, cell: CellId) -> bool {
        self.offset(cell) != 0
    }

    /// Move `steps` cells forward from `position` and resolve any jump.
    ///
    /// Overshooting the finish leaves `position` unchanged: a player must
    /// land exactly on the last cell. Zero steps means "step not taken" and
    /// also leaves `position` unchanged.
    #[inline]
    pub fn advance(&self, position: CellId, steps: Face) -> CellId {
        if steps == 0 {
            return position;
        }
        let landed = usize::from(position) + usize::from(steps);
        if landed >= self.arena.len() {
            return position;
        }
        let resolved = match self.resolution {
            JumpResolution::Chase => self.chase(landed),
            JumpResolution::Single => offset_by(landed, self.arena[landed]),
        };
        resolved as CellId
    }

    /// Follow jumps from `cell` until reaching an ordinary cell.
    #[inline]
    fn chase(&self, mut cell: usize) -> usize {
        // Finalized boards have no cycles; the bound only guards the loop.
        for _ in 0..self.arena.len() {
            let offset = self.arena[cell];
            if offset == 0 {
                break;
            }
            cell = offset_by(cell, offset);
        }
        cell
    }
}

impl From<&FinalizedBoard> for Board {
    fn from(params: &FinalizedBoard) -> Self {
        Self::new(params)
    }
}

impl From<FinalizedBoard> for Board {
    fn from(params: FinalizedBoard) -> Self {
        Self::new(&params)
    }
}

#[inline]
fn offset_by(cell: usize, offset: CellOffset) -> usize {
    (cell as isize + offset as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BoardBuilder;
    use proptest::prelude::*;

    fn small_board() -> Board {
        // 5x5: cells 0..=25.
        let params = BoardBuilder::new(5)
            .unwrap()
            .with_jump(3, 11)
            .unwrap()
            .with_jump(17, 4)
            .unwrap()
            .finalize()
            .unwrap();
        Board::new(&params)
    }

    #[test]
    fn arena_has_one_offset_per_cell() {
        let board = small_board();
        assert_eq!(board.cell_count(), 26);
        assert_eq!(board.end_position(), 25);
        assert_eq!(board.start_position(), 0);
        assert_eq!(board.offset(3), 8);
        assert_eq!(board.offset(17), -13);
        assert_eq!(board.arena().iter().filter(|&&o| o != 0).count(), 2);
        assert!(board.is_jump_cell(3));
        assert!(!board.is_jump_cell(4));
    }

    #[test]
    fn landing_on_ladder_climbs() {
        let board = small_board();
        assert_eq!(board.advance(0, 3), 11);
        assert_eq!(board.advance(1, 1), 2);
    }

    #[test]
    fn landing_on_snake_slides() {
        let board = small_board();
        assert_eq!(board.advance(15, 2), 4);
    }

    #[test]
    fn overshoot_stays_put() {
        let board = small_board();
        assert_eq!(board.advance(22, 4), 22);
        assert_eq!(board.advance(22, 3), 25);
    }

    #[test]
    fn finish_is_absorbing() {
        let board = small_board();
        let end = board.end_position();
        assert_eq!(board.advance(end, 0), end);
        for steps in 1..=127 {
            assert_eq!(board.advance(end, steps), end);
        }
    }

    #[test]
    fn zero_steps_never_moves() {
        let board = small_board();
        for cell in 0..=board.end_position() {
            assert_eq!(board.advance(cell, 0), cell);
        }
    }

    #[test]
    fn empty_board_has_no_jumps() {
        let board = Board::from(BoardBuilder::new(2).unwrap().finalize().unwrap());
        assert_eq!(board.arena(), &[0, 0, 0, 0, 0]);
        assert_eq!(board.advance(0, 4), 4);
    }

    #[test]
    fn chase_and_single_differ_on_chains() {
        let builder = BoardBuilder::new(10)
            .unwrap()
            .allow_chains(true)
            .with_jump(3, 14)
            .unwrap()
            .with_jump(14, 40)
            .unwrap()
            .with_jump(40, 22)
            .unwrap();

        let chase = Board::new(&builder.clone().finalize().unwrap());
        assert_eq!(chase.resolution(), JumpResolution::Chase);
        assert_eq!(chase.advance(0, 3), 22);
        assert_eq!(chase.advance(10, 4), 22);

        let single = Board::new(
            &builder
                .resolution(JumpResolution::Single)
                .finalize()
                .unwrap(),
        );
        assert_eq!(single.advance(0, 3), 14);
        assert_eq!(single.advance(10, 4), 40);
        assert_eq!(single.advance(35, 5), 22);
    }

    proptest! {
        #[test]
        fn advance_is_pure_and_bounded(position in 0u16..=25, steps in 0u8..=12) {
            let board = small_board();
            let a = board.advance(position, steps);
            let b = board.advance(position, steps);
            prop_assert_eq!(a, b);
            prop_assert!(a <= board.end_position());
            // A resolved landing never rests on a jump source.
            prop_assert!(a == position || !board.is_jump_cell(a));
        }
    }
}
