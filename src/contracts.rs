//! Contract-based validation for move requests.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::game::{Game, MoveError};
use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::position::Pos;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The active snapshot must not already have a winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks that the game is still undecided at the cursor.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cell at the requested position must be empty.
pub struct CellUnoccupied;

impl CellUnoccupied {
    /// Checks that the target cell holds no stone.
    #[instrument(skip(game))]
    pub fn check(pos: &Pos, game: &Game) -> Result<(), MoveError> {
        if !game.board().is_empty(*pos) {
            Err(MoveError::CellOccupied(*pos))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A request is legal if the game is still
/// undecided and the target cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move request.
    ///
    /// Terminality is checked first, so a finished game reports
    /// [`MoveError::GameOver`] even for occupied cells.
    #[instrument(skip(game))]
    pub fn check(pos: &Pos, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellUnoccupied::check(pos, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move requests.
///
/// Preconditions:
/// - Game must not be over at the cursor
/// - Target cell must be empty
///
/// Postconditions:
/// - Cursor still names a snapshot
/// - History still starts at the empty board
/// - Every step still places exactly one stone
pub struct MoveContract;

impl Contract<Game, Pos> for MoveContract {
    fn pre(game: &Game, action: &Pos) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), MoveError> {
        // Verify all invariants using the composed set
        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Player};

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
    fn test_precondition_empty_cell() {
        let game = Game::new();
        assert!(MoveContract::pre(&game, &Pos::new(7, 7)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut game = Game::new();
        game.request_move(Pos::new(7, 7)).unwrap();

        assert!(matches!(
            MoveContract::pre(&game, &Pos::new(7, 7)),
            Err(MoveError::CellOccupied(_))
        ));
    }

    #[test]
    fn test_precondition_game_over_wins_over_occupied() {
        let game = won_game();

        // (0, 0) is occupied, but terminality is reported first.
        assert_eq!(
            MoveContract::pre(&game, &Pos::new(0, 0)),
            Err(MoveError::GameOver)
        );
        assert_eq!(
            MoveContract::pre(&game, &Pos::new(14, 14)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        after.request_move(Pos::new(7, 7)).unwrap();

        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        // A history whose only step skips Black's turn.
        let origin = Board::new();
        let corrupt = origin.with_move(Pos::new(0, 0), Player::White);
        let after = Game::from_parts(vec![origin, corrupt], 1);

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
