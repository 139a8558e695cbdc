use log::{debug, error};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::transfers_model::{Transfer, TransferInput, TransfersDocument};
use crate::constants::TRANSFERS_STORAGE_KEY;
use crate::errors::{Error, Result, StorageError};
use crate::pay_cycle::PayFrequency;
use crate::persistence::PersistenceAdapter;
use crate::stores::{insert_record, remove_record, update_record, Entity, EntityInput, WriteOutcome};
use crate::utils::id_generator::IdGenerator;

/// Transfer store. Unlike the other stores it shares its document with the
/// default transfer frequency.
pub struct TransferService {
    persistence: PersistenceAdapter,
    document: RwLock<TransfersDocument>,
    ids: IdGenerator,
}

impl TransferService {
    pub fn load(persistence: PersistenceAdapter) -> Self {
        let document: TransfersDocument = persistence.load_or_default(TRANSFERS_STORAGE_KEY);
        let ids = IdGenerator::new();
        for transfer in &document.transfers {
            ids.observe(&transfer.id);
        }
        debug!("Loaded {} transfer(s)", document.transfers.len());
        Self {
            persistence,
            document: RwLock::new(document),
            ids,
        }
    }

    pub fn list(&self) -> Result<Vec<Transfer>> {
        Ok(self.read()?.transfers.clone())
    }

    pub fn get(&self, id: &str) -> Result<Transfer> {
        self.read()?
            .transfers
            .iter()
            .find(|transfer| transfer.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found("Transfer", id))
    }

    pub fn create(&self, input: TransferInput) -> Result<WriteOutcome<Transfer>> {
        input.validate()?;
        let mut document = self.write()?;
        let transfer = Transfer::from_input(self.ids.next_id(), input);
        insert_record(&mut document.transfers, transfer.clone());
        Ok(WriteOutcome::new(transfer, self.persist(&document)))
    }

    pub fn update(&self, id: &str, input: TransferInput) -> Result<WriteOutcome<Transfer>> {
        input.validate()?;
        let mut document = self.write()?;
        let transfer = update_record(&mut document.transfers, id, input)?;
        Ok(WriteOutcome::new(transfer, self.persist(&document)))
    }

    pub fn delete(&self, id: &str) -> Result<WriteOutcome<Transfer>> {
        let mut document = self.write()?;
        let transfer = remove_record(&mut document.transfers, id)?;
        Ok(WriteOutcome::new(transfer, self.persist(&document)))
    }

    pub fn transfer_frequency(&self) -> Result<PayFrequency> {
        Ok(self.read()?.transfer_frequency)
    }

    pub fn set_transfer_frequency(&self, frequency: PayFrequency) -> Result<WriteOutcome<PayFrequency>> {
        let mut document = self.write()?;
        document.transfer_frequency = frequency;
        debug!("Default transfer frequency set to {}", frequency);
        Ok(WriteOutcome::new(frequency, self.persist(&document)))
    }

    fn persist(&self, document: &TransfersDocument) -> Option<StorageError> {
        match self.persistence.save(TRANSFERS_STORAGE_KEY, document) {
            Ok(()) => None,
            Err(e) => {
                error!("Could not save transfers: {}", e);
                Some(e)
            }
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, TransfersDocument>> {
        self.document
            .read()
            .map_err(|_| Error::Unexpected("transfer store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TransfersDocument>> {
        self.document
            .write()
            .map_err(|_| Error::Unexpected("transfer store lock poisoned".to_string()))
    }
}
