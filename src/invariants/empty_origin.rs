//! Empty origin invariant: move zero is always the empty board.

use super::Invariant;
use crate::game::Game;

/// Invariant: The first snapshot is the empty board.
///
/// Truncation on branching keeps at least the snapshots up to the
/// cursor, and the cursor is never negative, so the origin can never
/// be discarded or replaced.
pub struct EmptyOriginInvariant;

impl Invariant<Game> for EmptyOriginInvariant {
    fn holds(game: &Game) -> bool {
        match game.snapshots().first() {
            Some(board) => board.cells().iter().all(|cell| cell.is_empty()),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
