//! Core domain types for the five-in-a-row board.

use crate::position::Pos;
use serde::{Deserialize, Serialize};

/// Board width and height in cells.
pub const BOARD_SIZE: usize = 15;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Black stones (moves first).
    Black,
    /// White stones (moves second).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the player who makes the move with the given turn index.
    ///
    /// Black owns every even turn, starting from turn 0.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 {
            Player::Black
        } else {
            Player::White
        }
    }

    /// Single-character board symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's stone.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 15x15 game board.
///
/// Boards are immutable values: placing a stone produces a new board
/// and leaves the receiver untouched, so snapshots of earlier turns
/// stay valid for as long as anyone holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cell(pos).is_empty()
    }

    /// Returns a copy of the board with `player`'s stone placed at `pos`.
    ///
    /// Any cell already occupied is silently overwritten; callers that
    /// need occupancy checks go through [`crate::Game::request_move`].
    pub fn with_move(&self, pos: Pos, player: Player) -> Board {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::Occupied(player);
        Board { cells }
    }

    /// Returns all cells as a slice in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = match self.cells[row * BOARD_SIZE + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.symbol(),
                };
                result.push(symbol);
                if col < BOARD_SIZE - 1 {
                    result.push(' ');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game as seen from the active snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// The winning player, if the active snapshot holds five in a row.
    pub winner: Option<Player>,
    /// The player whose turn it is at the active snapshot.
    pub to_move: Player,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Some(player) => write!(f, "Winner: {player}"),
            None => write!(f, "Next player: {}", self.to_move),
        }
    }
}
