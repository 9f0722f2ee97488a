// Error types: board configuration errors, situation catalogue errors

use crate::turn::TurnState;
use thiserror::Error;

/// Configuration Errors
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum ConfigError {
    #[error("Board size {0} is too small (minimum is {min})", min = crate::config::MIN_BOARD_SIZE)]
    BoardTooSmall(usize),
    #[error("Cannot reconfigure the board while the turn is {0:?}")]
    TurnInProgress(TurnState),
}

/// Situation Catalogue Errors
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SituationError {
    #[error("Situation catalogue '{0}' is missing from the embedded assets")]
    MissingCatalogue(String),
    #[error("Malformed situation entry on line {line}: expected 'title | description'")]
    MalformedEntry { line: usize },
    #[error("Situation catalogue contains no entries")]
    EmptyCatalogue,
}

/// Game Errors
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Situation catalogue error: {0}")]
    Situation(#[from] SituationError),
}
