//! Accounts module - domain models and the account store.

mod accounts_model;

#[cfg(test)]
mod accounts_model_tests;

pub use accounts_model::{Account, AccountInput, AccountType};

use crate::stores::EntityStore;

/// Store of bank, card, investment and loan accounts.
pub type AccountStore = EntityStore<Account>;
