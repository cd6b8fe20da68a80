use std::fmt;

use crate::{piece::{Color, PieceKind}, Board, Piece, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Geometric legality only: sliding pieces may pass through other pieces
    /// and king safety is never considered. Turn ownership is the caller's job.
    pub fn is_valid(&self, board: &Board) -> bool {
        let piece = match board.get_piece(self.from) {
            Some(p) => p,
            None => return false,
        };

        // Destination must be empty or hold an enemy piece
        if let Some(dest_piece) = board.get_piece(self.to) {
            if dest_piece.color == piece.color {
                return false;
            }
        }

        self.is_valid_piece_movement(piece, board)
    }

    fn is_valid_piece_movement(&self, piece: &Piece, board: &Board) -> bool {
        match piece.kind {
            PieceKind::Pawn { has_moved } => self.is_valid_pawn_move(piece.color, has_moved, board),
            PieceKind::Knight => self.is_valid_knight_move(),
            PieceKind::Bishop => self.is_valid_diagonal_move(),
            PieceKind::Rook => self.is_valid_straight_move(),
            PieceKind::Queen => self.is_valid_diagonal_move() || self.is_valid_straight_move(),
            PieceKind::King => self.is_valid_king_move(),
        }
    }

    fn is_valid_pawn_move(&self, color: Color, has_moved: bool, board: &Board) -> bool {
        let direction = color.forward();
        let (row_diff, col_diff) = self.from.delta(self.to);
        let target = board.get_piece(self.to);

        if col_diff == 0 {
            if row_diff == direction {
                return target.is_none();
            }
            // Only the landing square is checked; the square jumped over is not.
            if row_diff == 2 * direction && !has_moved {
                return target.is_none();
            }
            return false;
        }

        if col_diff.abs() == 1 && row_diff == direction {
            return matches!(target, Some(captured) if captured.color != color);
        }

        false
    }

    fn is_valid_knight_move(&self) -> bool {
        let (row_diff, col_diff) = self.from.delta(self.to);
        let (row_diff, col_diff) = (row_diff.abs(), col_diff.abs());

        (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
    }

    fn is_valid_diagonal_move(&self) -> bool {
        let (row_diff, col_diff) = self.from.delta(self.to);
        row_diff.abs() == col_diff.abs()
    }

    fn is_valid_straight_move(&self) -> bool {
        let (row_diff, col_diff) = self.from.delta(self.to);
        row_diff == 0 || col_diff == 0
    }

    fn is_valid_king_move(&self) -> bool {
        let (row_diff, col_diff) = self.from.delta(self.to);
        row_diff.abs() <= 1 && col_diff.abs() <= 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    fn valid(board: &Board, from: (u8, u8), to: (u8, u8)) -> bool {
        Move::new(at(from.0, from.1), at(to.0, to.1)).is_valid(board)
    }

    fn lone(kind: PieceKind, color: Color, row: u8, col: u8) -> Board {
        let mut board = Board::empty();
        board.place(kind, color, at(row, col));
        board
    }

    #[test]
    fn knight_jumps_in_an_l() {
        for color in [Color::White, Color::Black] {
            let board = lone(PieceKind::Knight, color, 4, 4);
            assert!(valid(&board, (4, 4), (6, 5)));
            assert!(valid(&board, (4, 4), (3, 2)));
            assert!(valid(&board, (4, 4), (2, 3)));
            assert!(!valid(&board, (4, 4), (6, 4)));
            assert!(!valid(&board, (4, 4), (5, 5)));
        }
    }

    /// `kind` of `color` on `from`, one enemy and one friendly piece as targets.
    fn with_targets(
        kind: PieceKind,
        color: Color,
        from: (u8, u8),
        enemy: (u8, u8),
        friend: (u8, u8),
    ) -> Board {
        let mut board = lone(kind, color, from.0, from.1);
        board.place(PieceKind::Knight, color.opposite(), at(enemy.0, enemy.1));
        board.place(PieceKind::Knight, color, at(friend.0, friend.1));
        board
    }

    #[test]
    fn rook_needs_a_shared_line() {
        for color in [Color::White, Color::Black] {
            let board = with_targets(PieceKind::Rook, color, (2, 3), (2, 0), (6, 3));
            assert!(valid(&board, (2, 3), (2, 7)));
            assert!(valid(&board, (2, 3), (7, 3)));
            assert!(!valid(&board, (2, 3), (3, 4)));
            assert!(valid(&board, (2, 3), (2, 0)));
            assert!(!valid(&board, (2, 3), (6, 3)));
        }
    }

    #[test]
    fn bishop_needs_a_diagonal() {
        for color in [Color::White, Color::Black] {
            let board = with_targets(PieceKind::Bishop, color, (7, 2), (4, 5), (6, 1));
            assert!(valid(&board, (7, 2), (2, 7)));
            assert!(valid(&board, (7, 2), (5, 0)));
            assert!(!valid(&board, (7, 2), (6, 2)));
            assert!(valid(&board, (7, 2), (4, 5)));
            assert!(!valid(&board, (7, 2), (6, 1)));
        }
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        for color in [Color::White, Color::Black] {
            let board = with_targets(PieceKind::Queen, color, (4, 4), (1, 1), (4, 7));
            assert!(valid(&board, (4, 4), (4, 0)));
            assert!(valid(&board, (4, 4), (0, 4)));
            assert!(valid(&board, (4, 4), (1, 7)));
            assert!(!valid(&board, (4, 4), (6, 5)));
            assert!(valid(&board, (4, 4), (1, 1)));
            assert!(!valid(&board, (4, 4), (4, 7)));
        }
    }

    #[test]
    fn king_steps_one_square() {
        for color in [Color::White, Color::Black] {
            let board = with_targets(PieceKind::King, color, (0, 4), (1, 4), (0, 3));
            assert!(valid(&board, (0, 4), (1, 3)));
            assert!(valid(&board, (0, 4), (0, 5)));
            assert!(!valid(&board, (0, 4), (2, 4)));
            assert!(valid(&board, (0, 4), (1, 4)));
            assert!(!valid(&board, (0, 4), (0, 3)));
        }
    }

    #[test]
    fn knight_captures_enemies_only() {
        for color in [Color::White, Color::Black] {
            let board = with_targets(PieceKind::Knight, color, (4, 4), (6, 5), (2, 3));
            assert!(valid(&board, (4, 4), (6, 5)));
            assert!(!valid(&board, (4, 4), (2, 3)));
        }
    }

    #[test]
    fn staying_put_is_never_valid() {
        for kind in [PieceKind::Rook, PieceKind::Bishop, PieceKind::Queen, PieceKind::King] {
            let board = lone(kind, Color::White, 3, 3);
            assert!(!valid(&board, (3, 3), (3, 3)), "{kind:?}");
        }
    }

    #[test]
    fn sliders_ignore_blockers() {
        let mut board = Board::empty();
        board.place(PieceKind::Bishop, Color::White, at(7, 2));
        board.place(PieceKind::PAWN, Color::White, at(6, 3));
        board.place(PieceKind::Knight, Color::Black, at(4, 5));
        assert!(valid(&board, (7, 2), (4, 5)));
    }

    #[test]
    fn cannot_land_on_own_piece() {
        let mut board = Board::empty();
        board.place(PieceKind::Queen, Color::Black, at(0, 3));
        board.place(PieceKind::King, Color::Black, at(0, 4));
        board.place(PieceKind::Rook, Color::White, at(7, 3));
        assert!(!valid(&board, (0, 3), (0, 4)));
        assert!(valid(&board, (0, 3), (7, 3)));
    }

    #[test]
    fn pawn_advances_toward_the_enemy() {
        let mut board = Board::empty();
        board.place(PieceKind::PAWN, Color::White, at(6, 0));
        board.place(PieceKind::PAWN, Color::Black, at(1, 7));
        assert!(valid(&board, (6, 0), (5, 0)));
        assert!(valid(&board, (6, 0), (4, 0)));
        assert!(!valid(&board, (6, 0), (7, 0)));
        assert!(!valid(&board, (6, 0), (3, 0)));
        assert!(valid(&board, (1, 7), (2, 7)));
        assert!(valid(&board, (1, 7), (3, 7)));
        assert!(!valid(&board, (1, 7), (0, 7)));
    }

    #[test]
    fn pawn_double_step_requires_unmoved_pawn() {
        let mut board = Board::empty();
        board.place(PieceKind::Pawn { has_moved: true }, Color::White, at(6, 2));
        assert!(!valid(&board, (6, 2), (4, 2)));
        assert!(valid(&board, (6, 2), (5, 2)));
    }

    #[test]
    fn pawn_double_step_only_checks_landing_square() {
        let mut board = Board::empty();
        board.place(PieceKind::PAWN, Color::Black, at(1, 4));
        board.place(PieceKind::Knight, Color::White, at(2, 4));
        assert!(valid(&board, (1, 4), (3, 4)));
    }

    #[test]
    fn pawn_captures_only_diagonally() {
        let mut board = Board::empty();
        board.place(PieceKind::PAWN, Color::White, at(4, 4));
        board.place(PieceKind::Rook, Color::Black, at(3, 3));
        board.place(PieceKind::Rook, Color::Black, at(3, 4));
        board.place(PieceKind::Rook, Color::White, at(3, 5));
        assert!(valid(&board, (4, 4), (3, 3)));
        assert!(!valid(&board, (4, 4), (3, 4)));
        assert!(!valid(&board, (4, 4), (3, 5)));

        let mut board = lone(PieceKind::PAWN, Color::Black, 3, 3);
        assert!(!valid(&board, (3, 3), (4, 4)));
        board.place(PieceKind::Rook, Color::White, at(4, 2));
        board.place(PieceKind::Rook, Color::White, at(4, 3));
        board.place(PieceKind::Rook, Color::Black, at(4, 4));
        assert!(valid(&board, (3, 3), (4, 2)));
        assert!(!valid(&board, (3, 3), (4, 3)));
        assert!(!valid(&board, (3, 3), (4, 4)));
    }

    #[test]
    fn empty_origin_is_not_a_move() {
        assert!(!valid(&Board::empty(), (0, 0), (1, 1)));
    }
}
