//! Transfers module - planned moves of money between accounts.

mod transfers_model;
mod transfers_service;

#[cfg(test)]
mod transfers_service_tests;

pub use transfers_model::{Transfer, TransferInput, TransfersDocument};
pub use transfers_service::TransferService;
