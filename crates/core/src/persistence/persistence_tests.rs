//! Tests for the typed persistence adapter.

#[cfg(test)]
mod tests {
    use crate::errors::StorageError;
    use crate::persistence::{InMemoryDocumentStore, PersistenceAdapter};
    use crate::utils::time_utils::iso_date_opt;
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        name: String,
        #[serde(default, with = "iso_date_opt")]
        due_date: Option<NaiveDate>,
    }

    fn sample() -> Sample {
        Sample {
            name: "Rent".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 9, 1),
        }
    }

    fn setup() -> (Arc<InMemoryDocumentStore>, PersistenceAdapter) {
        let store = Arc::new(InMemoryDocumentStore::new());
        let adapter = PersistenceAdapter::new(store.clone());
        (store, adapter)
    }

    #[test]
    fn test_save_then_load_preserves_dates() {
        let (store, adapter) = setup();
        adapter.save("sample", &sample()).unwrap();

        assert_eq!(
            store.raw("sample").as_deref(),
            Some(r#"{"name":"Rent","dueDate":"2024-09-01"}"#)
        );
        assert_eq!(adapter.load::<Sample>("sample"), Some(sample()));
    }

    #[test]
    fn test_missing_key_loads_none() {
        let (_, adapter) = setup();
        assert_eq!(adapter.load::<Sample>("missing"), None);
        assert_eq!(adapter.load_or_default::<Sample>("missing"), Sample::default());
    }

    #[test]
    fn test_malformed_document_loads_none() {
        let store = Arc::new(InMemoryDocumentStore::new().with_document("sample", "{not json"));
        let adapter = PersistenceAdapter::new(store.clone());

        assert_eq!(adapter.load::<Sample>("sample"), None);
        // The bad document is left untouched until the next save.
        assert_eq!(store.raw("sample").as_deref(), Some("{not json"));
    }

    #[test]
    fn test_wrong_shape_loads_none() {
        let store = Arc::new(InMemoryDocumentStore::new().with_document("sample", "[1, 2, 3]"));
        let adapter = PersistenceAdapter::new(store);
        assert_eq!(adapter.load::<Sample>("sample"), None);
    }

    #[test]
    fn test_failed_write_keeps_previous_document() {
        let (store, adapter) = setup();
        adapter.save("sample", &sample()).unwrap();
        let before = store.raw("sample");

        store.set_fail_writes(true);
        let updated = Sample {
            name: "Mortgage".to_string(),
            due_date: None,
        };
        let err = adapter.save("sample", &updated).unwrap_err();

        assert!(matches!(err, StorageError::WriteFailed { ref key, .. } if key == "sample"));
        assert_eq!(store.raw("sample"), before);
    }

    #[test]
    fn test_legacy_timestamp_dates_load() {
        let store = Arc::new(InMemoryDocumentStore::new().with_document(
            "sample",
            r#"{"name":"Rent","dueDate":"2024-09-01T00:00:00.000Z"}"#,
        ));
        let adapter = PersistenceAdapter::new(store);
        assert_eq!(adapter.load::<Sample>("sample"), Some(sample()));
    }
}
