use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a forward pawn move. White plays up the board.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn { has_moved: bool },
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const PAWN: PieceKind = PieceKind::Pawn { has_moved: false };

    /// The kind with per-piece state cleared, one value per drawable piece.
    pub fn identity(self) -> PieceKind {
        match self {
            PieceKind::Pawn { .. } => PieceKind::PAWN,
            other => other,
        }
    }
}

/// A piece knows where it stands; the board cell holding it must agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Self { kind, color, position }
    }

    /// Moves the piece's own coordinates. A pawn loses its double step for good.
    pub(crate) fn relocate(&mut self, to: Position) {
        self.position = to;
        if let PieceKind::Pawn { has_moved } = &mut self.kind {
            *has_moved = true;
        }
    }

    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn { .. }) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn { .. }) => '♟',
        }
    }

    /// FEN letter: uppercase for White.
    pub fn letter(&self) -> char {
        let letter = match self.kind {
            PieceKind::Pawn { .. } => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }
}
