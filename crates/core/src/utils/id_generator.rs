//! Timestamp-derived record identifiers.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Issues ids as milliseconds since the Unix epoch, rendered as strings.
///
/// The sequence is strictly increasing: when two ids are requested within the
/// same millisecond (or the clock steps backwards) the next free value is used.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_issued: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the sequence after an already-issued id, so reloaded stores
    /// never hand out an id they already hold.
    pub fn observe(&self, existing_id: &str) {
        if let Ok(value) = existing_id.parse::<i64>() {
            self.last_issued.fetch_max(value, Ordering::SeqCst);
        }
    }

    pub fn next_id(&self) -> String {
        self.next_at(Utc::now().timestamp_millis()).to_string()
    }

    fn next_at(&self, now_millis: i64) -> i64 {
        let mut previous = self.last_issued.load(Ordering::SeqCst);
        loop {
            let candidate = now_millis.max(previous + 1);
            match self.last_issued.compare_exchange(
                previous,
                candidate,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return candidate,
                Err(actual) => previous = actual,
            }
        }
    }
}
