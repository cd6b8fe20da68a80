use std::{env, str::FromStr};

use thiserror::Error;

/// Environment variable consulted for a seed when none is given on the command line.
pub const SEED_ENV: &str = "CHESS_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown game mode `{0}` (expected `single` or `two`)")]
    UnknownMode(String),
    #[error("invalid seed `{0}`")]
    InvalidSeed(String),
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// White is human, Black replies with random moves.
    #[default]
    SinglePlayer,
    TwoPlayer,
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" | "single-player" | "1" => Ok(GameMode::SinglePlayer),
            "two" | "two-player" | "multi" | "2" => Ok(GameMode::TwoPlayer),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Seed for the random opponent; entropy when `None`.
    pub seed: Option<u64>,
    /// Draw pieces with FEN letters instead of chess glyphs.
    pub ascii: bool,
}

impl GameConfig {
    pub fn new(mode: GameMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn seeded(mode: GameMode, seed: u64) -> Self {
        Self { mode, seed: Some(seed), ..Self::default() }
    }

    /// Command-line arguments first, then `CHESS_SEED` if no seed was given.
    pub fn load<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::from_args(args)?;
        if config.seed.is_none() {
            if let Ok(raw) = env::var(SEED_ENV) {
                config.seed = Some(parse_seed(&raw)?);
            }
        }
        Ok(config)
    }

    /// Parses arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mode" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--mode"))?;
                    config.mode = value.parse()?;
                }
                "--two-player" => config.mode = GameMode::TwoPlayer,
                "--ascii" => config.ascii = true,
                "--seed" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    config.seed = Some(parse_seed(&value)?);
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(config)
    }
}

fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSeed(raw.to_string()))
}
