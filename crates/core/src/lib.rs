//! FinanceFlow Core - domain models, entity stores and derived views.
//!
//! This crate holds the business rules for accounts, expenses, goals,
//! transfers and the pay cycle. It is storage-agnostic: documents are read
//! and written through the [`persistence::DocumentStore`] trait, which the
//! `storage-sqlite` crate implements.

pub mod accounts;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod expenses;
pub mod goals;
pub mod pay_cycle;
pub mod persistence;
pub mod stores;
pub mod transfers;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
