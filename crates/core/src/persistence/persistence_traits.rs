//! Document store trait.
//!
//! The trait is backend-agnostic: the SQLite crate and the in-memory fake
//! both implement it, and everything above it only sees JSON text per key.

use crate::errors::StorageError;

/// Key-value store of JSON documents.
///
/// Implementations must replace a document atomically: a reader observes
/// either the previous document or the new one, never a partial write.
pub trait DocumentStore: Send + Sync {
    /// Returns the raw document stored under `key`, or `None` if absent.
    fn read_document(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the document stored under `key`.
    fn write_document(&self, key: &str, document: &str) -> Result<(), StorageError>;
}
