//! Error types for the dispatch library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::DispatchStatus;

/// Comprehensive error type for all dispatch operations.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Stop not found for the given ID
    #[error("Stop with ID {id} not found")]
    StopNotFound { id: String },
    /// Dependency not found on the stop being edited
    #[error("Dependency with ID {id} not found")]
    DependencyNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// A shipping-stage status was requested before the order was checked
    #[error(
        "Cannot set status to {}: Loading / Out for Delivery / Delivered require ✅ Order checked first",
        .status.label()
    )]
    VerificationRequired { status: DispatchStatus },
    /// Elevation was attempted with a credential the access gate refused
    #[error("Access denied: dispatch editing is locked")]
    AccessDenied,
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> DispatchError {
        DispatchError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl DispatchError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a new database error with additional context.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Whether the error is a recoverable status-guard rejection, i.e. the
    /// operator can fix the draft and retry.
    pub fn is_verification_required(&self) -> bool {
        matches!(self, Self::VerificationRequired { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DispatchError::database(message, e))
    }
}

/// Result type alias for dispatch operations
pub type Result<T> = std::result::Result<T, DispatchError>;
