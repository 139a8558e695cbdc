//! Expenses module - recurring bills and subscriptions.

mod expenses_model;


pub use expenses_model::{Expense, ExpenseCategory, ExpenseFrequency, ExpenseInput};

use crate::stores::EntityStore;

pub type ExpenseStore = EntityStore<Expense>;
