//! Typed board coordinates for five-in-a-row moves.

use crate::types::{BOARD_SIZE, CELL_COUNT};
use tracing::instrument;

/// A position on the 15x15 board.
///
/// A `Pos` always names a real cell: both coordinates are below
/// [`BOARD_SIZE`]. Untrusted input enters through [`Pos::from_index`],
/// [`Pos::from_coords`] or [`str::parse`], which reject anything off
/// the board, so board lookups never need a bounds check of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    /// Row, 0-14 from the top.
    row: u8,
    /// Column, 0-14 from the left.
    col: u8,
}

impl Pos {
    /// Creates a position from known-good coordinates.
    ///
    /// Debug builds assert both coordinates are on the board; callers
    /// holding untrusted input use [`Pos::from_coords`] instead.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "coordinates off the board: ({row}, {col})"
        );
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Creates a position from untrusted coordinates.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Self::new(row, col))
    }

    /// Creates a position from a flat cell index in row-major order.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Converts the position to a flat cell index in row-major order.
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Row coordinate (0-14).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column coordinate (0-14).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Steps `(dr, dc)` cells from this position, if the result stays
    /// on the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Self::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl std::str::FromStr for Pos {
    type Err = String;

    /// Parses `"row,col"` coordinates or a flat cell index (0-224).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((row, col)) = s.split_once(',') {
            let row: usize = row
                .trim()
                .parse()
                .map_err(|_| format!("invalid row: {row:?}"))?;
            let col: usize = col
                .trim()
                .parse()
                .map_err(|_| format!("invalid column: {col:?}"))?;
            Self::from_coords(row, col)
                .ok_or_else(|| format!("coordinates off the board: ({row}, {col})"))
        } else {
            let index: usize = s
                .parse()
                .map_err(|_| format!("invalid cell index: {s:?}"))?;
            Self::from_index(index).ok_or_else(|| format!("cell index out of range: {index}"))
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for index in [0, 14, 15, 112, 224] {
            let pos = Pos::from_index(index).unwrap();
            assert_eq!(pos.to_index(), index);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Pos::from_index(CELL_COUNT), None);
        assert_eq!(Pos::from_index(usize::MAX), None);
    }

    #[test]
    fn test_from_coords_bounds() {
        assert!(Pos::from_coords(14, 14).is_some());
        assert_eq!(Pos::from_coords(15, 0), None);
        assert_eq!(Pos::from_coords(0, 15), None);
    }

    #[test]
    fn test_offset_within_board() {
        let pos = Pos::new(7, 7);
        assert_eq!(pos.offset(1, 1), Some(Pos::new(8, 8)));
        assert_eq!(pos.offset(-1, 0), Some(Pos::new(6, 7)));
    }

    #[test]
    fn test_offset_stops_at_edges() {
        assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
        assert_eq!(Pos::new(0, 14).offset(0, 1), None);
        assert_eq!(Pos::new(14, 0).offset(1, -1), None);
    }

    #[test]
    fn test_parse_coordinate_pair() {
        assert_eq!("7,7".parse::<Pos>(), Ok(Pos::new(7, 7)));
        assert_eq!(" 0 , 14 ".parse::<Pos>(), Ok(Pos::new(0, 14)));
    }

    #[test]
    fn test_parse_flat_index() {
        assert_eq!("0".parse::<Pos>(), Ok(Pos::new(0, 0)));
        assert_eq!("224".parse::<Pos>(), Ok(Pos::new(14, 14)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("15,0".parse::<Pos>().is_err());
        assert!("225".parse::<Pos>().is_err());
        assert!("7,".parse::<Pos>().is_err());
        assert!("center".parse::<Pos>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Pos::new(3, 12).to_string(), "(3, 12)");
    }
}
