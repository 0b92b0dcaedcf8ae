//! Error types for the phone directory.
//!
//! This module defines custom error types using `thiserror`. Every directory
//! error is recoverable: callers render it and carry on with the next command.

use thiserror::Error;

/// Outcomes of directory operations that did not succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The operation referenced a name absent from the store
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Undo was requested with nothing recorded
    #[error("No actions to undo")]
    EmptyLog,

    /// The most recent action was a delete, which cannot be reversed
    #[error("Undo for delete is unsupported (contact '{name}' was not restored)")]
    UnsupportedUndo { name: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
