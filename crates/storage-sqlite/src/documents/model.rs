//! Database model for stored documents.

use diesel::prelude::*;

/// One JSON document stored under its key.
#[derive(Queryable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::app_documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AppDocumentDB {
    pub document_key: String,
    pub document_value: String,
    pub updated_at: String,
}
