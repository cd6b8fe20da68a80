use chess_core::{Board, ChessError, Color, Move, Position, Snapshot};
use log::{debug, trace};

use crate::{
    ai::RandomOpponent,
    config::{GameConfig, GameMode},
};

/// Where the click-driven controller stands between two clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingSelection,
    AwaitingDestination(Position),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(Position),
    MoveApplied,
    InvalidSelection,
    InvalidMove,
    IgnoredEmptyCell,
}

/// Everything a front-end needs to run one game. The game never ends on its
/// own; a front-end starts over with [`GameState::restart`].
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Color,
    state: TurnState,
    config: GameConfig,
    opponent: Option<RandomOpponent>,
    last_opponent_move: Option<Move>,
}

pub fn new_game(mode: GameMode) -> GameState {
    GameState::new(GameConfig::new(mode))
}

pub fn render_snapshot(state: &GameState) -> Snapshot {
    state.board.snapshot()
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self::from_position(Board::new(), Color::White, config)
    }

    /// Starts from an arbitrary board. In single-player mode the opponent
    /// plays the color that does not move first.
    pub fn from_position(board: Board, turn: Color, config: GameConfig) -> Self {
        let opponent = match config.mode {
            GameMode::SinglePlayer => Some(match config.seed {
                Some(seed) => RandomOpponent::seeded(turn.opposite(), seed),
                None => RandomOpponent::new(turn.opposite()),
            }),
            GameMode::TwoPlayer => None,
        };

        GameState {
            board,
            turn,
            state: TurnState::AwaitingSelection,
            config,
            opponent,
            last_opponent_move: None,
        }
    }

    pub fn restart(&mut self, mode: GameMode) {
        debug!("restarting in {mode:?}");
        *self = GameState::new(GameConfig { mode, ..self.config });
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.turn
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn turn_state(&self) -> TurnState {
        self.state
    }

    pub fn selection(&self) -> Option<Position> {
        match self.state {
            TurnState::AwaitingSelection => None,
            TurnState::AwaitingDestination(pos) => Some(pos),
        }
    }

    /// The reply chosen after the most recent human move, if any.
    pub fn last_opponent_move(&self) -> Option<Move> {
        self.last_opponent_move
    }

    pub fn handle_click(&mut self, row: i32, col: i32) -> Result<ClickOutcome, ChessError> {
        let pos = match Position::new(row, col) {
            Ok(pos) => pos,
            Err(err) => {
                self.state = TurnState::AwaitingSelection;
                return Err(err);
            }
        };

        match self.state {
            TurnState::AwaitingSelection => match self.board.get_piece(pos) {
                None => Ok(ClickOutcome::IgnoredEmptyCell),
                Some(piece) if piece.color != self.turn => Ok(ClickOutcome::InvalidSelection),
                Some(_) => {
                    trace!("selected {pos}");
                    self.state = TurnState::AwaitingDestination(pos);
                    Ok(ClickOutcome::Selected(pos))
                }
            },
            TurnState::AwaitingDestination(from) => match self.try_move(from, pos) {
                Ok(()) => Ok(ClickOutcome::MoveApplied),
                Err(err) => {
                    trace!("rejected: {err}");
                    Ok(ClickOutcome::InvalidMove)
                }
            },
        }
    }

    /// Plays `from` -> `to` for the side to move, followed by the opponent's
    /// reply in single-player mode. Any pending selection is dropped.
    pub fn try_move(&mut self, from: Position, to: Position) -> Result<(), ChessError> {
        self.state = TurnState::AwaitingSelection;

        match self.board.get_piece(from) {
            Some(piece) if piece.color == self.turn => {}
            _ => return Err(ChessError::InvalidSelection(from)),
        }

        let chess_move = Move::new(from, to);
        if !chess_move.is_valid(&self.board) {
            return Err(ChessError::IllegalMove { from, to });
        }

        self.board.apply_move(chess_move);
        self.turn = self.turn.opposite();
        self.last_opponent_move = None;

        if let Some(opponent) = self.opponent.as_mut() {
            debug_assert_eq!(opponent.color(), self.turn);
            self.last_opponent_move = opponent.play(&mut self.board);
            if self.last_opponent_move.is_none() {
                debug!("{:?} has no move to reply with", self.turn);
            }
            self.turn = self.turn.opposite();
        }

        Ok(())
    }
}
