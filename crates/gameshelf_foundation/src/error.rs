//! Error types for gameshelf.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::record::AppId;

/// Result alias used across every gameshelf crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for gameshelf operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a game-not-found error for a name, prefix, or id the user typed.
    #[must_use]
    pub fn game_not_found(identifier: impl Into<String>) -> Self {
        Self::new(ErrorKind::GameNotFound(identifier.into()))
    }

    /// Creates an error for an app id that is not in the current library.
    #[must_use]
    pub fn app_not_found(id: AppId) -> Self {
        Self::new(ErrorKind::AppNotFound(id))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates a persistence failure for the given path.
    #[must_use]
    pub fn persistence(path: &Path, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Persistence {
            path: path.display().to_string(),
            message: message.to_string(),
        })
    }

    /// Creates a malformed data error for the given origin.
    #[must_use]
    pub fn malformed(origin: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::MalformedData {
            origin: origin.into(),
            message: message.to_string(),
        })
    }

    /// Creates an internal error for failures that are not the caller's fault.
    #[must_use]
    pub fn internal(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Internal(message.to_string()))
    }

    /// Returns true if this error reports a missing game.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::GameNotFound(_) | ErrorKind::AppNotFound(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No game matched a user-supplied identifier.
    #[error("no game found matching '{0}'")]
    GameNotFound(String),

    /// An app id is not present in the current library.
    #[error("app id {0} is not in the library")]
    AppNotFound(AppId),

    /// A command received an argument it cannot use.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A file could not be read or written.
    #[error("persistence failure on '{path}': {message}")]
    Persistence {
        /// The file that failed.
        path: String,
        /// The underlying I/O failure.
        message: String,
    },

    /// Stored data could not be decoded.
    #[error("malformed data in {origin}: {message}")]
    MalformedData {
        /// Where the data came from (usually a file path).
        origin: String,
        /// Decoder message.
        message: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Command or file that was being processed.
    pub source: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "in {source}"),
            None => Ok(()),
        }
    }
}
