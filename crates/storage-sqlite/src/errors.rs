//! Storage-specific error types for SQLite operations.
//!
//! These errors wrap Diesel and r2d2 types and are converted to the
//! storage-agnostic `financeflow_core::errors::StorageError` at the
//! `DocumentStore` boundary.

use diesel::result::Error as DieselError;
use financeflow_core::errors::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SqliteStorageError>;

#[derive(Error, Debug)]
pub enum SqliteStorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Database file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid database path: {0}")]
    InvalidPath(String),
}

impl SqliteStorageError {
    /// Converts into the core error for a failed read of `key`.
    pub fn for_read(self, key: &str) -> StorageError {
        match self {
            SqliteStorageError::QueryFailed(e) => StorageError::ReadFailed {
                key: key.to_string(),
                message: e.to_string(),
            },
            other => other.into(),
        }
    }

    /// Converts into the core error for a failed write of `key`.
    pub fn for_write(self, key: &str) -> StorageError {
        match self {
            SqliteStorageError::QueryFailed(e) => StorageError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            },
            other => other.into(),
        }
    }
}

impl From<SqliteStorageError> for StorageError {
    fn from(err: SqliteStorageError) -> Self {
        match err {
            SqliteStorageError::MigrationFailed(e) => StorageError::MigrationFailed(e),
            other => StorageError::ConnectionFailed(other.to_string()),
        }
    }
}
