//! Error types for the ladder computation
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application. Specific failure kinds are `LadderError` variants
//! and can be recovered from an `anyhow::Error` with `downcast_ref`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific ladder scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LadderError {
    #[error("Unknown player: {player_id}")]
    UnknownPlayer { player_id: String },

    #[error("Invalid game: {player_id} cannot play against themselves")]
    InvalidGame { player_id: String },

    #[error("Duplicate player in roster: {player_id}")]
    DuplicatePlayer { player_id: String },

    #[error("Malformed record in {source_name} at line {line}: {reason}")]
    MalformedRecord {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl LadderError {
    /// Find the `LadderError` behind an `anyhow::Error`, if there is one
    pub fn from_anyhow(error: &anyhow::Error) -> Option<&LadderError> {
        error.downcast_ref::<LadderError>()
    }
}
