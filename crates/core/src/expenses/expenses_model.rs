//! Expense domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::Result;
use crate::stores::{Entity, EntityInput};
use crate::utils::time_utils::iso_date_opt;
use crate::utils::validation::{require_positive, require_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Subscription,
    Utilities,
    #[serde(rename = "Rent/Mortgage")]
    RentMortgage,
    Insurance,
    Loan,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Subscription => "Subscription",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::RentMortgage => "Rent/Mortgage",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::Loan => "Loan",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often an expense recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExpenseFrequency {
    #[default]
    Monthly,
    Quarterly,
    Annually,
    #[serde(rename = "One-time")]
    OneTime,
}

impl ExpenseFrequency {
    /// Converts an amount charged at this frequency to its monthly share.
    ///
    /// One-time expenses do not recur and contribute nothing.
    pub fn monthly_equivalent(&self, amount: Decimal) -> Decimal {
        match self {
            ExpenseFrequency::Monthly => amount,
            ExpenseFrequency::Quarterly => amount / dec!(3),
            ExpenseFrequency::Annually => amount / dec!(12),
            ExpenseFrequency::OneTime => Decimal::ZERO,
        }
    }
}

/// Domain model representing a recurring expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub frequency: ExpenseFrequency,
    #[serde(
        default,
        with = "iso_date_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_due_date: Option<NaiveDate>,
}

impl Expense {
    pub fn monthly_amount(&self) -> Decimal {
        self.frequency.monthly_equivalent(self.amount)
    }
}

/// Input model for creating or editing an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInput {
    pub name: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub frequency: ExpenseFrequency,
    #[serde(default, with = "iso_date_opt")]
    pub next_due_date: Option<NaiveDate>,
}

impl EntityInput for ExpenseInput {
    fn validate(&self) -> Result<()> {
        require_text("name", &self.name, "Expense name")?;
        require_positive("amount", self.amount, "Amount")
    }
}

impl Entity for Expense {
    type Input = ExpenseInput;
    const KIND: &'static str = "Expense";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, input: ExpenseInput) -> Self {
        Expense {
            id,
            name: input.name.trim().to_string(),
            amount: input.amount,
            category: input.category,
            frequency: input.frequency,
            next_due_date: input.next_due_date,
        }
    }

    fn apply_input(&mut self, input: ExpenseInput) {
        self.name = input.name.trim().to_string();
        self.amount = input.amount;
        self.category = input.category;
        self.frequency = input.frequency;
        self.next_due_date = input.next_due_date;
    }
}
