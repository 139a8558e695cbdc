use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::pay_cycle::PayFrequency;
use crate::stores::{Entity, EntityInput};
use crate::utils::validation::{require_positive, require_text};

/// A planned transfer. Account fields are free-text labels, not account ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: String,
    /// Purpose of the transfer, e.g. "Emergency Fund".
    pub goal: String,
    pub from_account: String,
    pub to_account: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInput {
    pub goal: String,
    pub from_account: String,
    pub to_account: String,
    pub amount: Decimal,
}

impl EntityInput for TransferInput {
    fn validate(&self) -> Result<()> {
        require_text("goal", &self.goal, "Goal/Purpose")?;
        require_text("fromAccount", &self.from_account, "From Account")?;
        require_text("toAccount", &self.to_account, "To Account")?;
        require_positive("amount", self.amount, "Amount")
    }
}

impl Entity for Transfer {
    type Input = TransferInput;
    const KIND: &'static str = "Transfer";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, input: TransferInput) -> Self {
        Transfer {
            id,
            goal: input.goal.trim().to_string(),
            from_account: input.from_account.trim().to_string(),
            to_account: input.to_account.trim().to_string(),
            amount: input.amount,
        }
    }

    fn apply_input(&mut self, input: TransferInput) {
        self.goal = input.goal.trim().to_string();
        self.from_account = input.from_account.trim().to_string();
        self.to_account = input.to_account.trim().to_string();
        self.amount = input.amount;
    }
}

/// Stored shape of the transfers document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransfersDocument {
    #[serde(default)]
    pub transfers: Vec<Transfer>,
    #[serde(default, deserialize_with = "PayFrequency::deserialize_lenient")]
    pub transfer_frequency: PayFrequency,
}
