//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses mathematically verify that invariants hold
//! for ALL possible game states (bounded).

#[cfg(kani)]
mod proofs {
    use crate::{
        CursorInBoundsInvariant, EmptyOriginInvariant, Game, Invariant, Pos,
        SinglePlacementInvariant, CELL_COUNT,
    };

    /// Verify position indexes round-trip for every cell.
    #[kani::proof]
    fn verify_pos_index_roundtrip() {
        let index: usize = kani::any();
        kani::assume(index < CELL_COUNT);

        let pos = match Pos::from_index(index) {
            Some(pos) => pos,
            None => unreachable!(),
        };
        assert_eq!(pos.to_index(), index);
    }

    /// Verify CursorInBoundsInvariant holds for all reachable states.
    ///
    /// Proves: The cursor always names a snapshot in the history.
    #[kani::proof]
    #[kani::unwind(256)]
    fn verify_cursor_in_bounds() {
        let game: Game = kani::any();

        assert!(
            CursorInBoundsInvariant::holds(&game),
            "CursorInBoundsInvariant violated"
        );
    }

    /// Verify EmptyOriginInvariant survives jumps and branching moves.
    ///
    /// Proves: Move zero stays the empty board no matter how the
    /// timeline is rewritten.
    #[kani::proof]
    #[kani::unwind(256)]
    fn verify_empty_origin() {
        let mut game: Game = kani::any();

        let target: usize = kani::any();
        let _ = game.jump_to(target);
        let _ = game.request_move(kani::any());

        assert!(
            EmptyOriginInvariant::holds(&game),
            "EmptyOriginInvariant violated"
        );
    }

    /// Verify SinglePlacementInvariant holds for all reachable states.
    ///
    /// Proves: Every adjacent snapshot pair replays as one legal move.
    #[kani::proof]
    #[kani::unwind(256)]
    fn verify_single_placement() {
        let game: Game = kani::any();

        assert!(
            SinglePlacementInvariant::holds(&game),
            "SinglePlacementInvariant violated"
        );
    }
}
