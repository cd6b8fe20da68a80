use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("square ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("no piece of the side to move at {0}")]
    InvalidSelection(Position),
    #[error("piece at {from} cannot move to {to}")]
    IllegalMove { from: Position, to: Position },
}
