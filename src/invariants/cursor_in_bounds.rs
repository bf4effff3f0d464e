//! Cursor bounds invariant: the cursor always names a real snapshot.

use super::Invariant;
use crate::game::Game;

/// Invariant: The cursor indexes into the snapshot history.
///
/// The history holds at least the empty origin, and the cursor is
/// always strictly below its length, so [`Game::board`] can index
/// without a bounds check.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.cursor() < game.history_len()
    }

    fn description() -> &'static str {
        "Cursor always names a snapshot in the history"
    }
}
