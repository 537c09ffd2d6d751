use thiserror::Error;

/// Errors that end an IRC session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IRC error: {0}")]
    Irc(#[from] irc::error::Error),

    #[error("session task failed: {0}")]
    Task(String),
}
