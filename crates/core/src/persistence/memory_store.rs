use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::persistence_traits::DocumentStore;
use crate::errors::StorageError;

/// In-memory document store.
///
/// Used in tests and for ephemeral sessions. Writes can be made to fail on
/// demand to exercise storage-failure paths.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw document, bypassing serialization.
    pub fn with_document(self, key: &str, document: &str) -> Self {
        if let Ok(mut documents) = self.documents.write() {
            documents.insert(key.to_string(), document.to_string());
        }
        self
    }

    /// Makes every subsequent write fail (e.g. to simulate a full quota).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.documents
            .read()
            .ok()
            .and_then(|documents| documents.get(key).cloned())
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn read_document(&self, key: &str) -> Result<Option<String>, StorageError> {
        let documents = self.documents.read().map_err(|e| StorageError::ReadFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(documents.get(key).cloned())
    }

    fn write_document(&self, key: &str, document: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: "storage quota exceeded".to_string(),
            });
        }
        let mut documents = self.documents.write().map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        documents.insert(key.to_string(), document.to_string());
        Ok(())
    }
}
