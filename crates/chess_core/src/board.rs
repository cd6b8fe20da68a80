use std::fmt;

use log::{debug, warn};

use crate::{
    piece::{Color, PieceKind},
    position::BOARD_SIZE,
    ChessError, Move, Piece, Position,
};

const SIZE: usize = BOARD_SIZE as usize;

/// What the presentation layer needs to draw each cell. Kinds are reduced with
/// [`PieceKind::identity`], so a pawn always reads as [`PieceKind::PAWN`] and
/// each occupied cell is one of 12 kind/color pairs.
pub type Snapshot = [[Option<(PieceKind, Color)>; SIZE]; SIZE];

/// The 8x8 grid. Each game is assumed to hold one king per color; nothing
/// here enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset_to_initial_position();
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; SIZE]; SIZE],
        }
    }

    pub fn reset_to_initial_position(&mut self) {
        self.squares = [[None; SIZE]; SIZE];

        // Setup pawns
        for col in 0..BOARD_SIZE {
            self.place(PieceKind::PAWN, Color::Black, Position { row: 1, col });
            self.place(PieceKind::PAWN, Color::White, Position { row: 6, col });
        }

        // Setup other pieces
        let piece_order = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (col, &kind) in (0..BOARD_SIZE).zip(piece_order.iter()) {
            self.place(kind, Color::Black, Position { row: 0, col });
            self.place(kind, Color::White, Position { row: 7, col });
        }
    }

    /// Puts a new piece on `position`, replacing whatever stood there.
    pub fn place(&mut self, kind: PieceKind, color: Color, position: Position) {
        self.squares[position.row as usize][position.col as usize] =
            Some(Piece::new(kind, color, position));
    }

    pub fn piece_at(&self, row: i32, col: i32) -> Result<Option<&Piece>, ChessError> {
        let pos = Position::new(row, col)?;
        Ok(self.get_piece(pos))
    }

    pub fn get_piece(&self, pos: Position) -> Option<&Piece> {
        self.squares[pos.row as usize][pos.col as usize].as_ref()
    }

    /// Moves whatever stands on `from` to `to` without asking whether it may.
    /// Returns the captured piece, if any.
    pub fn apply_move(&mut self, chess_move: Move) -> Option<Piece> {
        let Move { from, to } = chess_move;
        let Some(mut piece) = self.squares[from.row as usize][from.col as usize].take() else {
            warn!("apply_move from empty square {from}");
            return None;
        };
        debug_assert_eq!(piece.position, from, "piece position out of sync with board");

        piece.relocate(to);
        let captured = self.squares[to.row as usize][to.col as usize].replace(piece);
        match &captured {
            Some(victim) => debug!("{chess_move}: {:?} takes {:?}", piece.kind, victim.kind),
            None => debug!("{chess_move}: {:?} {:?}", piece.color, piece.kind),
        }
        captured
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten().flatten()
    }

    pub fn legal_moves_from(&self, pos: Position) -> Vec<Move> {
        if self.get_piece(pos).is_none() {
            return Vec::new();
        }

        Position::all()
            .map(|target| Move::new(pos, target))
            .filter(|chess_move| chess_move.is_valid(self))
            .collect()
    }

    /// Every legal move for `color`, scanning the full board for each piece.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.pieces()
            .filter(|piece| piece.color == color)
            .flat_map(|piece| self.legal_moves_from(piece.position))
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut cells: Snapshot = [[None; SIZE]; SIZE];
        for piece in self.pieces() {
            cells[piece.position.row as usize][piece.position.col as usize] =
                Some((piece.kind.identity(), piece.color));
        }
        cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Glyphs by default; `{:#}` prints FEN letters and `.` for plain terminals.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ascii = f.alternate();
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", SIZE - row)?;
            for cell in cells {
                let shown = match (cell, ascii) {
                    (Some(piece), false) => piece.symbol(),
                    (Some(piece), true) => piece.letter(),
                    (None, false) => '·',
                    (None, true) => '.',
                };
                write!(f, " {shown}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}
