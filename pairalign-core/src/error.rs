//! Error types for the alignment engine

use thiserror::Error;

/// Errors that can occur while aligning a sequence pair
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AlignError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration(message.into())
    }
}

pub type AlignResult<T> = Result<T, AlignError>;
