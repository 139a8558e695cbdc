#[cfg(test)]
mod tests {
    use crate::constants::TRANSFERS_STORAGE_KEY;
    use crate::errors::Error;
    use crate::pay_cycle::PayFrequency;
    use crate::persistence::{InMemoryDocumentStore, PersistenceAdapter};
    use crate::transfers::{TransferInput, TransferService, TransfersDocument};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn input(goal: &str) -> TransferInput {
        TransferInput {
            goal: goal.to_string(),
            from_account: "Main Checking".to_string(),
            to_account: "High-Yield Savings".to_string(),
            amount: dec!(200),
        }
    }

    #[test]
    fn test_create_update_delete() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let service = TransferService::load(PersistenceAdapter::new(store.clone()));

        let created = service.create(input("Emergency Fund")).unwrap();
        assert!(created.persisted());
        let id = created.record.id.clone();

        let mut edited = input("Vacation");
        edited.amount = dec!(150);
        let updated = service.update(&id, edited).unwrap().record;
        assert_eq!(updated.id, id);
        assert_eq!(updated.goal, "Vacation");
        assert_eq!(service.get(&id).unwrap().amount, dec!(150));

        service.delete(&id).unwrap();
        assert!(service.list().unwrap().is_empty());
        assert!(matches!(service.get(&id), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_document_shape_includes_frequency() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let service = TransferService::load(PersistenceAdapter::new(store.clone()));
        assert_eq!(service.transfer_frequency().unwrap(), PayFrequency::BiWeekly);

        service.create(input("Emergency Fund")).unwrap();
        service.set_transfer_frequency(PayFrequency::Monthly).unwrap();

        let raw = store.raw(TRANSFERS_STORAGE_KEY).unwrap();
        let document: TransfersDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(document.transfers.len(), 1);
        assert_eq!(document.transfer_frequency, PayFrequency::Monthly);

        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["transferFrequency"], "Monthly");
    }

    #[test]
    fn test_invalid_input_is_rejected_before_storage() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let service = TransferService::load(PersistenceAdapter::new(store.clone()));

        let mut bad = input("Emergency Fund");
        bad.amount = dec!(-5);
        assert!(matches!(service.create(bad), Err(Error::Validation(_))));

        let mut blank = input("Emergency Fund");
        blank.to_account = " ".to_string();
        assert!(service.create(blank).is_err());

        assert!(store.raw(TRANSFERS_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_unknown_stored_frequency_keeps_transfers() {
        let store = InMemoryDocumentStore::new().with_document(
            TRANSFERS_STORAGE_KEY,
            r#"{"transfers":[{"id":"1","goal":"Car","fromAccount":"A","toAccount":"B","amount":25}],"transferFrequency":"Daily"}"#,
        );
        let service = TransferService::load(PersistenceAdapter::new(Arc::new(store)));
        assert_eq!(service.list().unwrap().len(), 1);
        assert_eq!(service.transfer_frequency().unwrap(), PayFrequency::BiWeekly);
    }

    #[test]
    fn test_new_ids_follow_loaded_ids() {
        let store = InMemoryDocumentStore::new().with_document(
            TRANSFERS_STORAGE_KEY,
            r#"{"transfers":[{"id":"99999999999999","goal":"Car","fromAccount":"A","toAccount":"B","amount":25}]}"#,
        );
        let service = TransferService::load(PersistenceAdapter::new(Arc::new(store)));
        let created = service.create(input("Holiday")).unwrap();
        assert_eq!(created.record.id, "100000000000000");
    }
}
