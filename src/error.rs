//! Custom error types for findash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for findash operations
#[derive(Error, Debug)]
pub enum FindashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Snapshot read/write errors (unreadable or malformed collection files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models and boundary input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Login failed; deliberately does not say whether the email or the
    /// password was wrong
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An operation that needs an authenticated user was called without one
    #[error("No user is logged in")]
    Unauthenticated,

    /// Password hashing errors
    #[error("Hashing error: {0}")]
    Hash(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Notification delivery errors
    #[error("Notification error: {0}")]
    Notify(String),
}

impl FindashError {
    /// Create a duplicate-entity error for users
    pub fn duplicate_user(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a duplicate-entity error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FindashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for FindashError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for findash operations
pub type FindashResult<T> = Result<T, FindashError>;
