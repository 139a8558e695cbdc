//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::stores::{Entity, EntityInput};
use crate::utils::time_utils::iso_date_opt;
use crate::utils::validation::{
    deserialize_optional_text, normalize_optional_text, require_non_negative, require_positive,
    require_text,
};

/// Domain model representing a savings goal.
///
/// `linked_account` is an unenforced account id used for display; deleting
/// the account leaves it dangling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    #[serde(
        default,
        with = "iso_date_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub linked_account: Option<String>,
}

/// Input model for creating or editing a goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalInput {
    pub name: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    #[serde(default, with = "iso_date_opt")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub linked_account: Option<String>,
}

impl EntityInput for GoalInput {
    fn validate(&self) -> Result<()> {
        require_text("name", &self.name, "Goal name")?;
        require_positive("targetAmount", self.target_amount, "Target amount")?;
        require_non_negative("currentAmount", self.current_amount, "Current amount")
    }
}

impl Entity for Goal {
    type Input = GoalInput;
    const KIND: &'static str = "Goal";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, input: GoalInput) -> Self {
        Goal {
            id,
            name: input.name.trim().to_string(),
            target_amount: input.target_amount,
            current_amount: input.current_amount,
            deadline: input.deadline,
            linked_account: normalize_optional_text(input.linked_account),
        }
    }

    fn apply_input(&mut self, input: GoalInput) {
        self.name = input.name.trim().to_string();
        self.target_amount = input.target_amount;
        self.current_amount = input.current_amount;
        self.deadline = input.deadline;
        self.linked_account = normalize_optional_text(input.linked_account);
    }
}
