//! Account domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, ValidationError};
use crate::stores::{Entity, EntityInput};
use crate::utils::validation::{deserialize_optional_text, normalize_optional_text, require_text};

/// Kind of financial account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Checking,
    Savings,
    #[serde(rename = "Credit Card")]
    CreditCard,
    Investment,
    Loan,
    Other,
}

impl AccountType {
    pub const ALL: [AccountType; 6] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::CreditCard,
        AccountType::Investment,
        AccountType::Loan,
        AccountType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
            AccountType::CreditCard => "Credit Card",
            AccountType::Investment => "Investment",
            AccountType::Loan => "Loan",
            AccountType::Other => "Other",
        }
    }

    /// Credit cards and loans are money owed, not held.
    pub fn is_liability(&self) -> bool {
        matches!(self, AccountType::CreditCard | AccountType::Loan)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        AccountType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidField {
                field: "type",
                message: format!("Unknown account type '{}'", s),
            })
    }
}

/// Domain model representing an account.
///
/// `balance` may be negative (e.g. an overdrawn checking account).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub institution: Option<String>,
}

/// Input model for creating or editing an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInput {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub institution: Option<String>,
}

impl EntityInput for AccountInput {
    fn validate(&self) -> Result<()> {
        require_text("name", &self.name, "Account name")
    }
}

impl Entity for Account {
    type Input = AccountInput;
    const KIND: &'static str = "Account";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, input: AccountInput) -> Self {
        Account {
            id,
            name: input.name.trim().to_string(),
            account_type: input.account_type,
            balance: input.balance,
            institution: normalize_optional_text(input.institution),
        }
    }

    fn apply_input(&mut self, input: AccountInput) {
        self.name = input.name.trim().to_string();
        self.account_type = input.account_type;
        self.balance = input.balance;
        self.institution = normalize_optional_text(input.institution);
    }
}
