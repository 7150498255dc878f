//! Error types for the visual lock

use thiserror::Error;

use crate::verify::Mismatch;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Input problems detected before verification runs. These never consume an
/// attempt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("selection required")]
    SelectionRequired,

    #[error("password required")]
    PasswordRequired,
}

/// The inline message shown to the user after a rejected submission
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMessage {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Mismatch(#[from] Mismatch),
}

impl LockMessage {
    /// Whether the message came from a failed verification (as opposed to
    /// incomplete input)
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, LockMessage::Mismatch(_))
    }
}

/// Configuration rejected at construction time
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Item sequence is empty")]
    NoItems,

    #[error("Correct index {index} is outside the {visible} selectable items")]
    CorrectIndexOutOfRange { index: usize, visible: usize },

    #[error("Expected password is empty")]
    EmptyPassword,

    #[error("Maximum attempts must be at least 1")]
    ZeroAttempts,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
