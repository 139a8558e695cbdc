use chrono::Utc;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::AppDocumentDB;
use crate::db::{self, get_connection, DbPool};
use crate::errors::{Result, SqliteStorageError};
use crate::schema::app_documents::dsl::*;
use financeflow_core::errors::StorageError;
use financeflow_core::persistence::DocumentStore;

/// [`DocumentStore`] backed by the `app_documents` table.
pub struct SqliteDocumentStore {
    pool: Arc<DbPool>,
}

impl SqliteDocumentStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteDocumentStore { pool }
    }

    /// Initializes the database at `db_path`, runs pending migrations and
    /// returns a ready store.
    pub fn open(db_path: &str) -> Result<Self> {
        let db_path = db::init(db_path)?;
        let pool = db::create_pool(&db_path)?;
        db::run_migrations(&pool)?;
        Ok(Self::new(pool))
    }

    /// Keys of every stored document, sorted.
    pub fn document_keys(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        let keys = app_documents
            .select(document_key)
            .order(document_key.asc())
            .load::<String>(&mut conn)?;
        Ok(keys)
    }

    /// Removes the document under `key`. Returns whether one existed.
    pub fn remove_document(&self, key: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(app_documents.filter(document_key.eq(key))).execute(&mut conn)?;
        Ok(deleted > 0)
    }

    fn fetch(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let value = app_documents
            .filter(document_key.eq(key))
            .select(document_value)
            .first::<String>(&mut conn)
            .optional()?;
        Ok(value)
    }

    fn replace(&self, key: &str, document: &str) -> Result<()> {
        let row = AppDocumentDB {
            document_key: key.to_string(),
            document_value: document.to_string(),
            updated_at: Utc::now().to_rfc3339(),
        };
        let mut conn = get_connection(&self.pool)?;
        conn.immediate_transaction::<_, SqliteStorageError, _>(|conn| {
            diesel::replace_into(app_documents).values(&row).execute(conn)?;
            Ok(())
        })?;
        debug!("Replaced document '{}'", key);
        Ok(())
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn read_document(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        self.fetch(key).map_err(|e| e.for_read(key))
    }

    fn write_document(&self, key: &str, document: &str) -> std::result::Result<(), StorageError> {
        self.replace(key, document).map_err(|e| e.for_write(key))
    }
}
