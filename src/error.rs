//! Error types for tickoff.
//!
//! A missing task is not an error: lookups return `Option` and mutations
//! return `bool`. The variants here cover rejected input and the
//! surrounding configuration and console I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tickoff operations
#[derive(Error, Debug)]
pub enum TodoError {
    // =========================================================================
    // Input Errors
    // =========================================================================
    /// Input rejected before it touched the task list
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to load settings
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TodoError {
    /// Create a validation error
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create the error returned for an empty or blank description
    pub fn empty_description() -> Self {
        Self::validation("description", "task description cannot be empty")
    }

    /// Create a configuration error with path
    pub fn config_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Check if the session can report this error and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => 2,
            Self::Config { .. } => 7,
            _ => 1,
        }
    }
}

/// Type alias for tickoff results
pub type Result<T> = std::result::Result<T, TodoError>;
