//! Gomoku Timeline library - five-in-a-row with a rewindable history
//!
//! This library provides the full rules of 15x15 five-in-a-row together
//! with a move timeline: every accepted move is kept as an immutable
//! board snapshot, a cursor can jump to any earlier move, and playing
//! from a rewound position branches the game by overwriting the
//! abandoned future.
//!
//! # Architecture
//!
//! - **Types**: Immutable board snapshots and the player vocabulary
//! - **Rules**: Pure win detection over rows, columns and diagonals
//! - **Game**: Move validation, snapshot history and cursor jumps
//! - **Contracts**: Pre/postconditions for every accepted move
//! - **Invariants**: First-class timeline properties, checked in debug builds
//!
//! # Example
//!
//! ```
//! use gomoku_timeline::{Game, Player, Pos};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new();
//!
//! // Black opens in the center; White answers.
//! game.request_move(Pos::new(7, 7))?;
//! game.request_move(Pos::new(7, 8))?;
//! assert_eq!(game.status().to_move, Player::Black);
//!
//! // Rewind to the opening and branch off a different continuation.
//! game.jump_to(1)?;
//! game.request_move(Pos::new(8, 8))?;
//! assert_eq!(game.history_len(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod contracts;
mod game;
mod invariants;
mod kani_support;
mod position;
mod rules;
mod types;

// Crate-level exports - Board vocabulary
pub use types::{Board, Cell, Player, Status, BOARD_SIZE, CELL_COUNT};

// Crate-level exports - Positions
pub use position::Pos;

// Crate-level exports - Rules
pub use rules::{check_winner, WIN_LEN};

// Crate-level exports - Game engine
pub use game::{Game, JumpError, MoveError};

// Crate-level exports - Contracts
pub use contracts::{CellUnoccupied, Contract, GameNotOver, LegalMove, MoveContract};

// Crate-level exports - Invariants
pub use invariants::{
    CursorInBoundsInvariant, EmptyOriginInvariant, Invariant, InvariantSet, InvariantViolation,
    SinglePlacementInvariant, TimelineInvariants,
};
