//! SQLite storage implementation for FinanceFlow.
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. It implements the `DocumentStore` trait from `financeflow-core` on
//! top of a single key/value table and contains:
//! - Database initialization and connection pooling
//! - Embedded Diesel migrations
//! - The `SqliteDocumentStore` repository
//!
//! ```text
//!      core (PersistenceAdapter)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod documents;
pub mod errors;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

pub use documents::{AppDocumentDB, SqliteDocumentStore};

// Re-export storage errors
pub use errors::{Result, SqliteStorageError};
