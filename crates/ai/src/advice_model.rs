//! Savings advice request and response types.

use financeflow_core::errors::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minimum length of the trimmed goals description.
pub const MIN_FINANCIAL_GOALS_CHARS: usize = 10;

/// Inputs collected by the advisor form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsAdviceRequest {
    /// Monthly income.
    pub income: Decimal,
    /// Monthly expenses.
    pub expenses: Decimal,
    /// Free-text description of what the user is saving for.
    pub financial_goals: String,
}

impl SavingsAdviceRequest {
    pub fn new(income: Decimal, expenses: Decimal, financial_goals: impl Into<String>) -> Self {
        Self {
            income,
            expenses,
            financial_goals: financial_goals.into(),
        }
    }

    /// Checks every field, reporting the first one that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.income < Decimal::ZERO {
            return Err(ValidationError::InvalidField {
                field: "income",
                message: "Income must be a positive number".to_string(),
            });
        }
        if self.expenses < Decimal::ZERO {
            return Err(ValidationError::InvalidField {
                field: "expenses",
                message: "Expenses must be a positive number".to_string(),
            });
        }
        if self.financial_goals.trim().chars().count() < MIN_FINANCIAL_GOALS_CHARS {
            return Err(ValidationError::InvalidField {
                field: "financialGoals",
                message: format!(
                    "Please describe your financial goals in at least {} characters.",
                    MIN_FINANCIAL_GOALS_CHARS
                ),
            });
        }
        Ok(())
    }
}

/// Advice returned by the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsAdvice {
    pub recommendations: String,
}
