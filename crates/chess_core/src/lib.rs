// Core chess game logic modules
pub mod board;
pub mod error;
pub mod piece;
pub mod position;
pub mod moves;

// Re-export main types for convenience
pub use board::{Board, Snapshot};
pub use error::ChessError;
pub use piece::{Piece, Color, PieceKind};
pub use position::Position;
pub use moves::Move;
