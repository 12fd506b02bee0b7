//! The turn state machine.
//!
//! ```text
//!            move (no finish)            move lands on side²
//!  Running ───────────────▶ Running ───────────────────────▶ Finished
//!     ▲     current += 1 mod n                current = winner    │
//!     └───────────────────────────── reset() ─────────────────────┘
//! ```

use smallvec::SmallVec;

use ladder_board::Board;
use ladder_core::{CellId, CompoundRoll, Face, GameState, PlayerId};

use crate::error::GameError;

/// Positions for up to this many players live inline.
type Positions = SmallVec<[CellId; 8]>;

/// A game in progress on a shared board.
///
/// Mutated only by [`move_steps`](Self::move_steps) (and its
/// [`apply_roll`](Self::apply_roll) form), [`reset`](Self::reset), and
/// [`remove_player`](Self::remove_player). Not synchronised: drive each
/// game from one thread.
#[derive(Clone, Debug)]
pub struct Game<'b> {
    board: &'b Board,
    positions: Positions,
    current: usize,
    state: GameState,
}

impl<'b> Game<'b> {
    /// Most players a game can hold (every `u8` player id).
    pub const MAX_PLAYERS: usize = u8::MAX as usize + 1;

    /// Start a game with every player on the start cell and player 0 to move.
    pub fn new(board: &'b Board, player_count: usize) -> Result<Self, GameError> {
        if player_count == 0 || player_count > Self::MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount {
                count: player_count,
            });
        }
        Ok(Self {
            board,
            positions: SmallVec::from_elem(board.start_position(), player_count),
            current: 0,
            state: GameState::Running,
        })
    }

    /// Put everyone back on the start cell, hand the turn to player 0 and
    /// resume running. The board is reused as is.
    pub fn reset(&mut self) {
        let start = self.board.start_position();
        self.positions.iter_mut().for_each(|p| *p = start);
        self.current = 0;
        self.state = GameState::Running;
    }

    /// Play one turn for the current player.
    ///
    /// Applies each step in order through [`Board::advance`], stopping as
    /// soon as the player stands on the finish. Finishing leaves the
    /// turn with the winner; otherwise the turn passes to the next player.
    /// A call on a finished game changes nothing.
    #[inline]
    pub fn move_steps(&mut self, first: Face, second: Face, third: Face) -> GameState {
        if self.state == GameState::Finished {
            return GameState::Finished;
        }
        let board = self.board;
        let end = board.end_position();
        let position = &mut self.positions[self.current];

        for step in [first, second, third] {
            *position = board.advance(*position, step);
            if *position == end {
                self.state = GameState::Finished;
                return GameState::Finished;
            }
        }

        self.current += 1;
        if self.current == self.positions.len() {
            self.current = 0;
        }
        GameState::Running
    }

    /// [`move_steps`](Self::move_steps) with the faces of a compound roll.
    #[inline]
    pub fn apply_roll(&mut self, roll: CompoundRoll) -> GameState {
        let [first, second, third] = roll.faces();
        self.move_steps(first, second, third)
    }

    /// Remove a player from the rotation.
    ///
    /// Survivors are renumbered to stay contiguous. Returns the remapping:
    /// entry `i` is the old id of the player now known as `i`. The turn
    /// stays with the same player; if the removed player held it, it
    /// passes to their successor.
    ///
    /// # Panics
    ///
    /// If `id` is not in the game, or it is the only player left.
    pub fn remove_player(&mut self, id: PlayerId) -> Vec<PlayerId> {
        let removed = id.index();
        let count = self.positions.len();
        assert!(removed < count, "player {id} is not in the game");
        assert!(count > 1, "cannot remove the last player");

        self.positions.remove(removed);
        if removed < self.current {
            self.current -= 1;
        } else if self.current == self.positions.len() {
            self.current = 0;
        }

        log::debug!("removed player {id}; {} remain", self.positions.len());

        (0..count)
            .filter(|&old| old != removed)
            .map(|old| PlayerId(old as u8))
            .collect()
    }

    /// Whose turn it is, or the winner once the game has finished.
    #[inline]
    pub fn current_player(&self) -> PlayerId {
        PlayerId(self.current as u8)
    }

    /// The winner, if the game has finished.
    pub fn winner(&self) -> Option<PlayerId> {
        (self.state == GameState::Finished).then(|| self.current_player())
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// `true` until someone lands on the finish.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Position of one player.
    ///
    /// # Panics
    ///
    /// If `id` is not in the game.
    pub fn player_position(&self, id: PlayerId) -> CellId {
        self.positions[id.index()]
    }

    /// Positions of all players, indexed by player id.
    pub fn positions(&self) -> &[CellId] {
        &self.positions
    }

    /// Number of players still in the rotation.
    pub fn player_count(&self) -> usize {
        self.positions.len()
    }

    /// The board this game is played on.
    pub fn board(&self) -> &'b Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_board::BoardBuilder;
    use proptest::prelude::*;

    /// 5x5 board (finish at 25) with one ladder and one snake.
    fn board() -> Board {
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
    fn player_count_bounds() {
        let board = board();
        assert_eq!(
            Game::new(&board, 0).unwrap_err(),
            GameError::InvalidPlayerCount { count: 0 }
        );
        assert_eq!(
            Game::new(&board, 257).unwrap_err(),
            GameError::InvalidPlayerCount { count: 257 }
        );
        assert_eq!(Game::new(&board, 256).unwrap().player_count(), 256);
    }

    #[test]
    fn new_game_starts_everyone_at_zero() {
        let board = board();
        let game = Game::new(&board, 4).unwrap();
        assert_eq!(game.positions(), &[0, 0, 0, 0]);
        assert_eq!(game.current_player(), PlayerId(0));
        assert!(game.is_running());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn turn_rotates_through_ring() {
        let board = board();
        let mut game = Game::new(&board, 3).unwrap();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(game.current_player().0);
            assert_eq!(game.move_steps(1, 0, 0), GameState::Running);
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
        assert_eq!(game.positions(), &[2, 1, 1]);
    }

    #[test]
    fn steps_apply_in_order_with_jumps() {
        let board = board();
        let mut game = Game::new(&board, 2).unwrap();
        // 0 -> 3 (ladder to 11) -> 15 -> 17 (snake to 4)
        game.move_steps(3, 4, 2);
        assert_eq!(game.player_position(PlayerId(0)), 4);
        assert_eq!(game.current_player(), PlayerId(1));
    }

    #[test]
    fn finishing_leaves_turn_with_winner() {
        let board = board();
        let mut game = Game::new(&board, 3).unwrap();
        game.move_steps(1, 0, 0);
        // Player 1: 0 -> 11 via ladder, then 11 + 14 = 25.
        assert_eq!(game.move_steps(3, 14, 0), GameState::Finished);
        assert_eq!(game.current_player(), PlayerId(1));
        assert_eq!(game.winner(), Some(PlayerId(1)));
        assert_eq!(game.player_position(PlayerId(1)), 25);
        assert!(!game.is_running());
    }

    #[test]
    fn finish_short_circuits_remaining_steps() {
        let board = board();
        let mut game = Game::new(&board, 2).unwrap();
        game.positions[0] = 20;
        assert_eq!(game.move_steps(5, 6, 6), GameState::Finished);
        assert_eq!(game.positions(), &[25, 0]);
        assert_eq!(game.current_player(), PlayerId(0));
    }

    #[test]
    fn overshoot_wastes_only_that_step() {
        let board = board();
        let mut game = Game::new(&board, 2).unwrap();
        game.positions[0] = 22;
        // 6 overshoots, 2 lands on 24, 1 finishes.
        assert_eq!(game.move_steps(6, 2, 1), GameState::Finished);
    }

    #[test]
    fn void_roll_passes_turn() {
        let board = board();
        let mut game = Game::new(&board, 2).unwrap();
        assert_eq!(game.apply_roll(CompoundRoll::VOID), GameState::Running);
        assert_eq!(game.positions(), &[0, 0]);
        assert_eq!(game.current_player(), PlayerId(1));
    }

    #[test]
    fn move_after_finish_is_noop() {
        let board = board();
        let mut game = Game::new(&board, 2).unwrap();
        game.positions[0] = 24;
        game.move_steps(1, 0, 0);
        let before = game.clone();
        assert_eq!(game.move_steps(2, 0, 0), GameState::Finished);
        assert_eq!(game.positions(), before.positions());
        assert_eq!(game.current_player(), before.current_player());
    }

    #[test]
    fn reset_restores_initial_state() {
        let board = board();
        let mut game = Game::new(&board, 3).unwrap();
        game.move_steps(2, 0, 0);
        game.move_steps(3, 14, 0);
        assert!(!game.is_running());

        game.reset();
        assert!(game.is_running());
        assert_eq!(game.positions(), &[0, 0, 0]);
        assert_eq!(game.current_player(), PlayerId(0));
    }

    #[test]
    fn remove_player_remaps_survivors() {
        let board = board();
        let mut game = Game::new(&board, 4).unwrap();
        game.move_steps(1, 0, 0);
        game.move_steps(2, 0, 0);
        // Player 2 to move. Remove player 1.
        let remap = game.remove_player(PlayerId(1));
        assert_eq!(remap, vec![PlayerId(0), PlayerId(2), PlayerId(3)]);
        assert_eq!(game.positions(), &[1, 0, 0]);
        // Old player 2 is now player 1 and still holds the turn.
        assert_eq!(game.current_player(), PlayerId(1));
    }

    #[test]
    fn removing_current_last_player_wraps_turn() {
        let board = board();
        let mut game = Game::new(&board, 3).unwrap();
        game.move_steps(1, 0, 0);
        game.move_steps(1, 0, 0);
        assert_eq!(game.current_player(), PlayerId(2));
        game.remove_player(PlayerId(2));
        assert_eq!(game.current_player(), PlayerId(0));
        assert_eq!(game.player_count(), 2);
    }

    #[test]
    #[should_panic(expected = "not in the game")]
    fn removing_unknown_player_panics() {
        let board = board();
        let mut game = Game::new(&board, 2).unwrap();
        game.remove_player(PlayerId(5));
    }

    #[test]
    #[should_panic(expected = "last player")]
    fn removing_last_player_panics() {
        let board = board();
        let mut game = Game::new(&board, 1).unwrap();
        game.remove_player(PlayerId(0));
    }

    proptest! {
        #[test]
        fn positions_stay_on_board(
            players in 1usize..6,
            rolls in proptest::collection::vec((1u8..=6, 0u8..=6, 0u8..=6), 1..200),
        ) {
            let board = board();
            let mut game = Game::new(&board, players).unwrap();
            for (a, b, c) in rolls {
                let before = game.current_player();
                let state = game.move_steps(a, b, c);
                prop_assert!(game.positions().iter().all(|&p| p <= board.end_position()));
                match state {
                    GameState::Running => {
                        prop_assert_eq!(
                            game.current_player().index(),
                            (before.index() + 1) % players
                        );
                    }
                    GameState::Finished => {
                        prop_assert_eq!(game.current_player(), before);
                        prop_assert_eq!(game.player_position(before), board.end_position());
                        break;
                    }
                }
            }
        }
    }
}
