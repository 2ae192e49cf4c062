//! Error types
//!
//! Every failure the library or the command-line tool can hit. Callers that
//! only want the historical user-facing behavior render any runtime error as
//! [`GENERIC_MESSAGE`].

use std::path::PathBuf;

/// Message shown to users for any runtime failure
pub const GENERIC_MESSAGE: &str = "Error. Please check whether the file provided is valid.";

/// Result type with [`KeywordError`] as the default error
pub type Result<T, E = KeywordError> = std::result::Result<T, E>;

/// Errors raised while extracting keywords
#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    /// Wrong command-line arguments
    #[error("usage: {0}")]
    Usage(String),

    /// The input file could not be opened or read
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory was given where a file was expected
    #[error("the path '{0}' is a directory, but a file was expected")]
    PathIsDirectory(PathBuf),

    /// A line of input was not valid UTF-8
    #[error("line {line} is not valid UTF-8")]
    Decode { line: usize },

    /// The configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl KeywordError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a usage error (rendered as nothing)
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// The text shown to the user, if any
    pub fn user_message(&self) -> Option<&'static str> {
        if self.is_usage() {
            None
        } else {
            Some(GENERIC_MESSAGE)
        }
    }
}
