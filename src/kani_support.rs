//! Kani arbitrary implementations for timeline types.
//!
//! These implementations allow Kani to explore all possible values of
//! our types during model checking.

#[cfg(kani)]
use crate::{Board, Cell, Game, Player, Pos, CELL_COUNT};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() {
            Player::Black
        } else {
            Player::White
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Pos {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < CELL_COUNT);
        match Pos::from_index(index) {
            Some(pos) => pos,
            None => unreachable!(),
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let mut board = Board::new();
        // Small stone count keeps the proofs tractable.
        let stones: usize = kani::any();
        kani::assume(stones <= 4);
        for _ in 0..stones {
            board = board.with_move(kani::any(), kani::any());
        }
        board
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Game {
    fn any() -> Self {
        // Only states reachable through the public API.
        let moves: usize = kani::any();
        kani::assume(moves <= 3);
        let mut game = Game::new();
        for _ in 0..moves {
            let _ = game.request_move(kani::any());
        }
        game
    }
}
