//! Single placement invariant: each step adds exactly one stone.

use super::Invariant;
use crate::game::Game;
use crate::types::{Cell, Player};

/// Invariant: Adjacent snapshots differ by exactly one placement.
///
/// Each snapshot extends its predecessor by one stone on a previously
/// empty cell, placed by the player whose turn it was. No step moves,
/// removes or recolors a stone, so every snapshot pair in the history
/// replays as a legal move.
pub struct SinglePlacementInvariant;

impl Invariant<Game> for SinglePlacementInvariant {
    fn holds(game: &Game) -> bool {
        for (turn, pair) in game.snapshots().windows(2).enumerate() {
            let expected = Player::for_turn(turn);
            let mut placements = 0;

            for (before, after) in pair[0].cells().iter().zip(pair[1].cells().iter()) {
                match (before, after) {
                    (before, after) if before == after => {}
                    (Cell::Empty, Cell::Occupied(player)) if *player == expected => {
                        placements += 1;
                    }
                    _ => return false,
                }
            }

            if placements != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each step places exactly one stone for the player on turn"
    }
}
