use thiserror::Error;

/// Failures that abort a game-start attempt. All of them are recovered at
/// the app boundary: the board stays empty and the UI returns to idle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("trivia provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
    #[error("only {found} categories have enough clues, need {needed}")]
    InsufficientCategories { found: usize, needed: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
