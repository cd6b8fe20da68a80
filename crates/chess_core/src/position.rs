use std::fmt;

use crate::ChessError;

pub const BOARD_SIZE: u8 = 8;

/// A board cell. Row 0 is Black's back rank, column 0 is the a-file.
///
/// Outside this crate a `Position` can only come from [`Position::new`],
/// [`Position::from_algebraic`] or [`Position::all`], so it always lies on
/// the board and indexing the grid with it cannot fail.
///
/// ```compile_fail
/// let off_board = chess_core::Position { row: 8, col: 4 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) row: u8, // 0-7, top to bottom
    pub(crate) col: u8, // 0-7, a-h
}

impl Position {
    pub fn new(row: i32, col: i32) -> Result<Self, ChessError> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Ok(Self { row: row as u8, col: col as u8 })
        } else {
            Err(ChessError::OutOfBounds { row, col })
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn from_algebraic(notation: &str) -> Option<Self> {
        let mut chars = notation.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }

        Some(Self {
            row: BOARD_SIZE - (rank as u8 - b'0'),
            col: file as u8 - b'a',
        })
    }

    /// All 64 cells, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }

    pub(crate) fn delta(self, to: Position) -> (i8, i8) {
        (to.row as i8 - self.row as i8, to.col as i8 - self.col as i8)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, BOARD_SIZE - self.row)
    }
}
