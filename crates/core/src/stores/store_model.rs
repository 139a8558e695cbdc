use crate::errors::{Error, Result, StorageError};

/// Result of a store mutation.
///
/// The mutation is always applied in memory; `storage_error` is set when the
/// follow-up save failed, in which case the in-memory state stays the source
/// of truth and the caller should surface a notification.
#[derive(Debug, Clone)]
pub struct WriteOutcome<T> {
    pub record: T,
    pub storage_error: Option<StorageError>,
}

impl<T> WriteOutcome<T> {
    pub fn new(record: T, storage_error: Option<StorageError>) -> Self {
        Self {
            record,
            storage_error,
        }
    }

    pub fn persisted(&self) -> bool {
        self.storage_error.is_none()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WriteOutcome<U> {
        WriteOutcome {
            record: f(self.record),
            storage_error: self.storage_error,
        }
    }

    /// Treats a failed save as an error.
    pub fn into_persisted(self) -> Result<T> {
        match self.storage_error {
            Some(e) => Err(Error::Storage(e)),
            None => Ok(self.record),
        }
    }
}
