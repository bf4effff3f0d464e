//! Cursor movement and mouse mapping for the board grid.

use crossterm::event::KeyCode;
use gomoku_timeline::{Pos, BOARD_SIZE};
use ratatui::layout::Rect;

/// Width of one rendered cell in terminal columns.
pub const CELL_WIDTH: u16 = 3;

/// Moves the cursor one cell based on arrow keys, staying on the board.
pub fn move_cursor(cursor: Pos, key: KeyCode) -> Pos {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(BOARD_SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(BOARD_SIZE - 1)),

        // No change for other keys
        _ => (row, col),
    };
    Pos::new(row, col)
}

/// Maps a terminal click to the board cell drawn at that point.
///
/// `area` is the inner grid area recorded during the last draw; each
/// cell is [`CELL_WIDTH`] columns wide and one row tall.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Pos> {
    if column < area.x || row < area.y {
        return None;
    }
    let line = (row - area.y) as usize;
    if line >= area.height as usize {
        return None;
    }
    let col = ((column - area.x) / CELL_WIDTH) as usize;
    Pos::from_coords(line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_cursor_steps() {
        let center = Pos::new(7, 7);
        assert_eq!(move_cursor(center, KeyCode::Up), Pos::new(6, 7));
        assert_eq!(move_cursor(center, KeyCode::Down), Pos::new(8, 7));
        assert_eq!(move_cursor(center, KeyCode::Left), Pos::new(7, 6));
        assert_eq!(move_cursor(center, KeyCode::Right), Pos::new(7, 8));
    }

    #[test]
    fn test_move_cursor_clamps_at_edges() {
        assert_eq!(move_cursor(Pos::new(0, 0), KeyCode::Up), Pos::new(0, 0));
        assert_eq!(move_cursor(Pos::new(0, 0), KeyCode::Left), Pos::new(0, 0));
        assert_eq!(
            move_cursor(Pos::new(14, 14), KeyCode::Down),
            Pos::new(14, 14)
        );
        assert_eq!(
            move_cursor(Pos::new(14, 14), KeyCode::Right),
            Pos::new(14, 14)
        );
    }

    #[test]
    fn test_move_cursor_ignores_other_keys() {
        let pos = Pos::new(3, 4);
        assert_eq!(move_cursor(pos, KeyCode::Char('x')), pos);
    }

    #[test]
    fn test_cell_at_maps_cells() {
        let area = Rect::new(10, 5, 45, 15);
        assert_eq!(cell_at(area, 10, 5), Some(Pos::new(0, 0)));
        assert_eq!(cell_at(area, 12, 5), Some(Pos::new(0, 0)));
        assert_eq!(cell_at(area, 13, 5), Some(Pos::new(0, 1)));
        assert_eq!(cell_at(area, 10 + 3 * 14, 5 + 14), Some(Pos::new(14, 14)));
    }

    #[test]
    fn test_cell_at_outside_area() {
        let area = Rect::new(10, 5, 45, 15);
        assert_eq!(cell_at(area, 9, 5), None);
        assert_eq!(cell_at(area, 10, 4), None);
        assert_eq!(cell_at(area, 10, 5 + 15), None);
    }

    #[test]
    fn test_cell_at_past_last_column() {
        // Area wider than the grid: clicks in the margin hit no cell.
        let area = Rect::new(0, 0, 60, 15);
        assert_eq!(cell_at(area, 45, 0), None);
    }
}
