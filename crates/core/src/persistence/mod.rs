//! Persistence module - the document store contract and its typed adapter.

mod memory_store;
mod persistence_adapter;
mod persistence_traits;

#[cfg(test)]
mod persistence_tests;

pub use memory_store::InMemoryDocumentStore;
pub use persistence_adapter::PersistenceAdapter;
pub use persistence_traits::DocumentStore;
