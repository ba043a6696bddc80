//! Error types for folio-core

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration is missing or invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error while reading a file
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A value could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }
}
