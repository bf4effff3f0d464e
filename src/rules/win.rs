//! Win detection logic for five-in-a-row.

use crate::position::Pos;
use crate::types::{Board, Player, BOARD_SIZE};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Number of aligned stones that wins the game.
pub const WIN_LEN: usize = 5;

/// Largest row or column offset at which a diagonal still spans
/// [`WIN_LEN`] cells.
const MAX_LINE_OFFSET: usize = BOARD_SIZE - WIN_LEN;

/// A scan direction across the board.
///
/// Every cell of the board lies on exactly one maximal line per
/// direction, so scanning all four families covers every possible
/// alignment of [`WIN_LEN`] stones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
enum Direction {
    /// Left to right along a row.
    Row,
    /// Top to bottom along a column.
    Column,
    /// Top-left towards bottom-right.
    Diagonal,
    /// Top-right towards bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// Coordinate delta for one step along a line in this direction.
    fn step(self) -> (i32, i32) {
        match self {
            Direction::Row => (0, 1),
            Direction::Column => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    /// Starting cells of every maximal line in this direction long
    /// enough to hold [`WIN_LEN`] stones.
    ///
    /// Diagonal lines starting more than [`MAX_LINE_OFFSET`] cells
    /// from a corner are shorter than [`WIN_LEN`] and are skipped.
    fn starts(self) -> Vec<Pos> {
        match self {
            Direction::Row => (0..BOARD_SIZE).map(|row| Pos::new(row, 0)).collect(),
            Direction::Column => (0..BOARD_SIZE).map(|col| Pos::new(0, col)).collect(),
            Direction::Diagonal => (0..=MAX_LINE_OFFSET)
                .map(|offset| Pos::new(offset, 0))
                .chain((1..=MAX_LINE_OFFSET).map(|offset| Pos::new(0, offset)))
                .collect(),
            Direction::AntiDiagonal => (0..=MAX_LINE_OFFSET)
                .map(|offset| Pos::new(offset, BOARD_SIZE - 1))
                .chain((1..=MAX_LINE_OFFSET).map(|offset| Pos::new(0, BOARD_SIZE - 1 - offset)))
                .collect(),
        }
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first run of [`WIN_LEN`] or more
/// consecutive stones found, scanning rows, then columns, then both
/// diagonal families. Returns `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for direction in Direction::iter() {
        for start in direction.starts() {
            if let Some(player) = scan_line(board, start, direction) {
                return Some(player);
            }
        }
    }

    None
}

/// Walks one maximal line and reports the first player holding
/// [`WIN_LEN`] consecutive stones on it.
fn scan_line(board: &Board, start: Pos, direction: Direction) -> Option<Player> {
    let (dr, dc) = direction.step();
    let mut run: Option<(Player, usize)> = None;
    let mut next = Some(start);

    while let Some(pos) = next {
        run = match (board.cell(pos).player(), run) {
            (Some(mark), Some((player, len))) if mark == player => Some((player, len + 1)),
            (Some(mark), _) => Some((mark, 1)),
            (None, _) => None,
        };
        if let Some((player, len)) = run {
            if len >= WIN_LEN {
                return Some(player);
            }
        }
        next = pos.offset(dr, dc);
    }

    None
}
