//! Core error types for FinanceFlow.
//!
//! This module defines storage-agnostic error types. Backend-specific errors
//! (Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Shorthand for a field-level validation failure.
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidField {
            field,
            message: message.into(),
        })
    }
}

/// Storage-agnostic error type for document reads and writes.
///
/// Backends convert their own error types into this enum so callers never
/// depend on a particular store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Failed to connect to the document store: {0}")]
    ConnectionFailed(String),

    #[error("Failed to read document '{key}': {message}")]
    ReadFailed { key: String, message: String },

    #[error("Failed to write document '{key}': {message}")]
    WriteFailed { key: String, message: String },

    #[error("Failed to serialize document '{key}': {message}")]
    Serialization { key: String, message: String },

    #[error("Storage migration failed: {0}")]
    MigrationFailed(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(String),

    #[error("Failed to parse date: {0}")]
    DateTimeParse(String),
}

impl ValidationError {
    /// Name of the offending field, when the error is field-level.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
