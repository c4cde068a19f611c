//! Error handling for the pairalign CLI

use pairalign_core::io::SourceError;
use pairalign_core::AlignError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("Alignment error: {message}")]
    Alignment { message: String },

    #[error("Resource error: {message}")]
    Resource { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat { message: message.into() }
    }

    pub fn alignment<S: Into<String>>(message: S) -> Self {
        Self::Alignment { message: message.into() }
    }

    pub fn resource<S: Into<String>>(message: S) -> Self {
        Self::Resource { message: message.into() }
    }

    /// Map a sequence reader failure for `path` to a user-facing error
    pub fn from_source(err: SourceError, path: PathBuf) -> Self {
        match err {
            SourceError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => Self::file_not_found(path),
            SourceError::Io(e) => Self::io(format!("{}: {}", path.display(), e)),
            other => Self::invalid_format(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::config(format!("TOML serialization error: {}", err))
    }
}

impl From<AlignError> for CliError {
    fn from(err: AlignError) -> Self {
        match err {
            AlignError::Configuration(message) => Self::config(message),
            AlignError::InvalidInput(message) => Self::alignment(message),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Helpful suggestions for `error`, if there is anything useful to say
pub fn suggestions(error: &CliError) -> Option<String> {
    match error {
        CliError::FileNotFound { path } => Some(format!(
            "\n\nSuggestions:\n\
             • Check that the file path is correct: {}\n\
             • Ensure you have read permissions for the file",
            path.display()
        )),

        CliError::InvalidFormat { .. } => Some(
            "\n\nSuggestions:\n\
             • Without --fasta, the sequence must be on the second line of the file\n\
             • Use --fasta for multi-line FASTA or FASTQ input"
                .to_string(),
        ),

        CliError::Config { .. } => Some(
            "\n\nSuggestions:\n\
             • Check your pairalign.toml configuration file\n\
             • Use 'pairalign config --example' to generate a sample configuration\n\
             • Scores must lie within ±1000000"
                .to_string(),
        ),

        CliError::Alignment { .. } => Some(
            "\n\nSuggestions:\n\
             • Use smaller scoring values for very long sequences\n\
             • Split long sequences into shorter regions"
                .to_string(),
        ),

        _ => None,
    }
}
