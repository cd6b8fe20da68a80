pub mod ai;
pub mod config;
pub mod game;

pub use ai::RandomOpponent;
pub use config::{ConfigError, GameConfig, GameMode};
pub use game::{new_game, render_snapshot, ClickOutcome, GameState, TurnState};
