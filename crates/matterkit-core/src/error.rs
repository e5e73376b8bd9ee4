//! Error types for front-matter extraction.
//!
//! All errors in the system are represented by the [`Error`] enum.
//! This ensures composable error handling across crates.
//!
//! A document without front matter is never an error: that outcome is a
//! normal result with no data.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// The core error type for all matterkit operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Invalid options (empty delimiter, empty language, bad config file, ...)
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// No parser could be resolved for the block's language tag
    #[error("No parser registered for front-matter language: {lang}")]
    UnknownLanguage { lang: String },

    /// Parse error raised by a caller-supplied parser or typed deserialization
    #[error("Parse error: {reason}")]
    ParseError { reason: String },

    /// Generic unclassified error
    #[error("Error: {0}")]
    Other(String),

    /// Wrapped error from other crates
    #[error("Wrapped error: {0}")]
    Wrapped(Box<dyn std::error::Error + Send + Sync>),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an IO error
    pub fn io(err: io::Error) -> Self {
        Error::Io(err)
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Error::FileNotFound { path: path.into() }
    }

    /// Map an I/O error on `path`, reporting missing files as [`Error::FileNotFound`]
    pub fn from_io_at(err: io::Error, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::file_not_found(path),
            _ => Error::Io(err),
        }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create an unresolved language error
    pub fn unknown_language(lang: impl Into<String>) -> Self {
        Error::UnknownLanguage { lang: lang.into() }
    }

    /// Create a parse error
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Error::ParseError {
            reason: reason.into(),
        }
    }

    /// Wrap an arbitrary error, e.g. from a custom parser's backing library
    pub fn wrap(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Wrapped(Box::new(err))
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error came from bad options rather than from the input
    pub fn is_config(&self) -> bool {
        matches!(self, Error::ConfigError { .. })
    }
}
