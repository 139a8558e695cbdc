//! SQLite storage for application documents.

mod model;
mod repository;

pub use model::AppDocumentDB;
pub use repository::SqliteDocumentStore;

// Re-export trait from core for convenience
pub use financeflow_core::persistence::DocumentStore;
