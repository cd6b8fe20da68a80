use chess_core::{Board, Color, Move};
use log::trace;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Plays a uniformly random legal move for one color.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    color: Color,
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new(color: Color) -> Self {
        Self::with_rng(color, StdRng::from_entropy())
    }

    pub fn seeded(color: Color, seed: u64) -> Self {
        Self::with_rng(color, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(color: Color, rng: StdRng) -> Self {
        RandomOpponent { color, rng }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Picks a move without touching the board. `None` when there is nothing to play.
    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        let candidates = board.legal_moves(self.color);
        trace!("{:?} has {} candidate moves", self.color, candidates.len());
        candidates.choose(&mut self.rng).copied()
    }

    /// Picks a move and applies it.
    pub fn play(&mut self, board: &mut Board) -> Option<Move> {
        let chosen = self.choose_move(board)?;
        board.apply_move(chosen);
        Some(chosen)
    }
}
