use thiserror::Error;

/// Errors surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Rejected construction input (board size or preset tiles).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Operation not allowed in the current state; `reset` recovers.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}

pub type Result<T> = std::result::Result<T, GameError>;
