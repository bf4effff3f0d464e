//! Game engine with a rewindable move timeline.
//!
//! Every accepted move appends a full board snapshot to a linear
//! history. A cursor selects the active snapshot; rewinding moves the
//! cursor without discarding anything, and the next accepted move
//! discards only the snapshots past the cursor.

use crate::contracts::{Contract, MoveContract};
use crate::position::Pos;
use crate::rules::check_winner;
use crate::types::{Board, Player, Status};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Errors
// ─────────────────────────────────────────────────────────────

/// Error that can occur when requesting a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The active snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Pos),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error that can occur when jumping through the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested move index has no snapshot.
    #[display("Move index {} is out of range (history length {})", requested, len)]
    OutOfRange {
        /// The index that was requested.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

// ─────────────────────────────────────────────────────────────
//  Game
// ─────────────────────────────────────────────────────────────

/// A five-in-a-row game with full move history and time travel.
///
/// The history always starts with the empty board at move zero, so a
/// game of `n` accepted moves holds `n + 1` snapshots. The cursor
/// names the active snapshot; every read-only query ([`Game::board`],
/// [`Game::status`], [`Game::to_move`]) answers for the cursor, not
/// for the newest move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Board snapshots, one per accepted move plus the empty origin.
    snapshots: Vec<Board>,
    /// Index of the active snapshot.
    cursor: usize,
}

impl Game {
    /// Creates a new game with an empty board at move zero.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Rebuilds a game from raw parts, bypassing move validation.
    #[cfg(any(test, kani))]
    pub(crate) fn from_parts(snapshots: Vec<Board>, cursor: usize) -> Self {
        Self { snapshots, cursor }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries against the active snapshot
    // ─────────────────────────────────────────────────────────────

    /// Returns the active board snapshot.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Returns all snapshots from the empty origin to the newest move.
    ///
    /// Snapshots are plain values; cloning one out of this slice keeps
    /// it valid even after later moves rewrite the timeline.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots in the history, including the empty origin.
    pub fn history_len(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the active snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the player whose turn it is at the active snapshot.
    ///
    /// Turn order is a pure function of the cursor: Black is to move
    /// whenever the cursor is even. Jumping the cursor is enough to
    /// restore the turn of that point in the game.
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.cursor)
    }

    /// Checks whether the active snapshot has a winner.
    pub fn is_over(&self) -> bool {
        check_winner(self.board()).is_some()
    }

    /// Returns the status of the active snapshot.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn status(&self) -> Status {
        Status {
            winner: check_winner(self.board()),
            to_move: self.to_move(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Requests a stone placement at `pos` for the player to move.
    ///
    /// On success the new snapshot becomes the active one and its move
    /// index is returned. Snapshots past the previous cursor are
    /// discarded first, so playing after a rewind starts a fresh
    /// branch of the timeline.
    ///
    /// # Errors
    ///
    /// Checks [`MoveError::GameOver`] before [`MoveError::CellOccupied`],
    /// so a finished game rejects every cell uniformly. A rejected
    /// request leaves the game untouched.
    #[instrument(skip(self), fields(cursor = self.cursor, player = ?self.to_move()))]
    pub fn request_move(&mut self, pos: Pos) -> Result<usize, MoveError> {
        MoveContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let next = self.board().with_move(pos, self.to_move());
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(self.cursor)
    }

    /// Jumps the cursor to the given move index.
    ///
    /// Jumping never discards snapshots and is always allowed while
    /// the index is in range, including away from a won position.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `move_index` has no
    /// snapshot. A rejected jump leaves the cursor where it was.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        if move_index >= self.snapshots.len() {
            return Err(JumpError::OutOfRange {
                requested: move_index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = move_index;
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    /// Plays out a horizontal Black win on row 0 in nine moves.
    fn won_game() -> Game {
        let mut game = Game::new();
        for col in 0..4 {
            game.request_move(Pos::new(0, col)).unwrap();
            game.request_move(Pos::new(1, col)).unwrap();
        }
        game.request_move(Pos::new(0, 4)).unwrap();
        game
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.to_move(), Player::Black);
        assert!(!game.is_over());
    }

    #[test]
    fn test_request_move_advances() {
        let mut game = Game::new();
        let cursor = game.request_move(Pos::new(7, 7)).unwrap();
        assert_eq!(cursor, 1);
        assert_eq!(game.to_move(), Player::White);
        assert_eq!(
            game.board().cell(Pos::new(7, 7)),
            Cell::Occupied(Player::Black)
        );
    }

    #[test]
    fn test_occupied_cell_rejected_without_side_effects() {
        let mut game = Game::new();
        game.request_move(Pos::new(7, 7)).unwrap();
        let snapshot = game.clone();

        for _ in 0..2 {
            assert_eq!(
                game.request_move(Pos::new(7, 7)),
                Err(MoveError::CellOccupied(Pos::new(7, 7)))
            );
            assert_eq!(game, snapshot);
        }
    }

    #[test]
    fn test_won_game_rejects_every_cell() {
        let mut game = won_game();
        assert!(game.is_over());
        // Even an empty cell is rejected once the game is decided.
        assert_eq!(
            game.request_move(Pos::new(14, 14)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_game_over_reported_before_occupied() {
        let mut game = won_game();
        assert_eq!(game.request_move(Pos::new(0, 0)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = Game::new();
        assert_eq!(
            game.jump_to(1),
            Err(JumpError::OutOfRange {
                requested: 1,
                len: 1
            })
        );
        assert_eq!(game.cursor(), 0);
    }

    #[test]
    fn test_jump_keeps_snapshots() {
        let mut game = won_game();
        let len = game.history_len();
        game.jump_to(2).unwrap();
        assert_eq!(game.history_len(), len);
        assert_eq!(game.cursor(), 2);
        assert_eq!(game.to_move(), Player::Black);
    }

    #[test]
    fn test_jump_away_from_win_resumes_play() {
        let mut game = won_game();
        game.jump_to(8).unwrap();
        assert!(!game.is_over());
        let cursor = game.request_move(Pos::new(14, 14)).unwrap();
        assert_eq!(cursor, 9);
    }

    #[test]
    fn test_move_after_rewind_truncates_future() {
        let mut game = Game::new();
        for col in 0..5 {
            game.request_move(Pos::new(7, col)).unwrap();
        }
        game.jump_to(2).unwrap();
        game.request_move(Pos::new(9, 9)).unwrap();
        assert_eq!(game.history_len(), 4);
        assert_eq!(game.cursor(), 3);
    }
}
