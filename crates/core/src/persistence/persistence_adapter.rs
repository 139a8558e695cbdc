use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::persistence_traits::DocumentStore;
use crate::errors::StorageError;

/// Typed load/save over a [`DocumentStore`].
///
/// `load` never fails: a missing key, unreadable store or malformed document
/// all come back as `None` so the caller can fall back to its default.
#[derive(Clone)]
pub struct PersistenceAdapter {
    store: Arc<dyn DocumentStore>,
}

impl PersistenceAdapter {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.read_document(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored document for key '{}'", key);
                return None;
            }
            Err(e) => {
                warn!("Could not read document '{}', using defaults: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding malformed document '{}': {}", key, e);
                None
            }
        }
    }

    /// Loads the document under `key`, falling back to `T::default()`.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load(key).unwrap_or_default()
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        // Serialize before touching the store so a bad value never clobbers the old one.
        let document = serde_json::to_string(value).map_err(|e| StorageError::Serialization {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.store.write_document(key, &document)?;
        debug!("Saved document '{}' ({} bytes)", key, document.len());
        Ok(())
    }
}
