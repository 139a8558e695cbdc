use log::{debug, error};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::store_model::WriteOutcome;
use super::store_traits::{Entity, EntityInput};
use crate::errors::{Error, Result, StorageError};
use crate::persistence::PersistenceAdapter;
use crate::utils::id_generator::IdGenerator;

/// In-memory collection of `E`, mirrored to a single document.
///
/// Records keep insertion order. Each mutation is applied in memory and then
/// the whole collection is saved while the write lock is still held, so
/// saves land in the same order as the mutations.
pub struct EntityStore<E: Entity> {
    key: &'static str,
    persistence: PersistenceAdapter,
    records: RwLock<Vec<E>>,
    ids: IdGenerator,
}

impl<E: Entity> EntityStore<E> {
    /// Loads the collection stored under `key`; missing or malformed data
    /// starts an empty store.
    pub fn load(persistence: PersistenceAdapter, key: &'static str) -> Self {
        let records: Vec<E> = persistence.load_or_default(key);
        let ids = IdGenerator::new();
        for record in &records {
            ids.observe(record.id());
        }
        debug!("Loaded {} {} record(s) from '{}'", records.len(), E::KIND, key);
        Self {
            key,
            persistence,
            records: RwLock::new(records),
            ids,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn list(&self) -> Result<Vec<E>> {
        Ok(self.read()?.clone())
    }

    pub fn get(&self, id: &str) -> Result<E> {
        self.read()?
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| Error::not_found(E::KIND, id))
    }

    pub fn create(&self, input: E::Input) -> Result<WriteOutcome<E>> {
        input.validate()?;
        let mut records = self.write()?;
        let record = E::from_input(self.ids.next_id(), input);
        insert_record(&mut records, record.clone());
        debug!("Created {} '{}'", E::KIND, record.id());
        Ok(WriteOutcome::new(record, self.persist(&records)))
    }

    pub fn update(&self, id: &str, input: E::Input) -> Result<WriteOutcome<E>> {
        input.validate()?;
        let mut records = self.write()?;
        let record = update_record(&mut records, id, input)?;
        debug!("Updated {} '{}'", E::KIND, id);
        Ok(WriteOutcome::new(record, self.persist(&records)))
    }

    /// Removes a record and returns it.
    pub fn delete(&self, id: &str) -> Result<WriteOutcome<E>> {
        let mut records = self.write()?;
        let record = remove_record(&mut records, id)?;
        debug!("Deleted {} '{}'", E::KIND, id);
        Ok(WriteOutcome::new(record, self.persist(&records)))
    }

    fn persist(&self, records: &[E]) -> Option<StorageError> {
        match self.persistence.save(self.key, records) {
            Ok(()) => None,
            Err(e) => {
                error!("Could not save {} records: {}", E::KIND, e);
                Some(e)
            }
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<E>>> {
        self.records
            .read()
            .map_err(|_| Error::Unexpected(format!("{} store lock poisoned", E::KIND)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<E>>> {
        self.records
            .write()
            .map_err(|_| Error::Unexpected(format!("{} store lock poisoned", E::KIND)))
    }
}

pub(crate) fn insert_record<E: Entity>(records: &mut Vec<E>, record: E) {
    records.push(record);
}

pub(crate) fn update_record<E: Entity>(records: &mut [E], id: &str, input: E::Input) -> Result<E> {
    let record = records
        .iter_mut()
        .find(|record| record.id() == id)
        .ok_or_else(|| Error::not_found(E::KIND, id))?;
    record.apply_input(input);
    Ok(record.clone())
}

pub(crate) fn remove_record<E: Entity>(records: &mut Vec<E>, id: &str) -> Result<E> {
    let position = records
        .iter()
        .position(|record| record.id() == id)
        .ok_or_else(|| Error::not_found(E::KIND, id))?;
    Ok(records.remove(position))
}
