use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, ValidationError};
use crate::utils::time_utils::iso_date_opt;

/// Interval between paychecks (also used as the default transfer cadence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PayFrequency {
    Weekly,
    #[default]
    #[serde(rename = "Bi-weekly")]
    BiWeekly,
    Monthly,
}

impl PayFrequency {
    pub const ALL: [PayFrequency; 3] = [
        PayFrequency::Weekly,
        PayFrequency::BiWeekly,
        PayFrequency::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "Weekly",
            PayFrequency::BiWeekly => "Bi-weekly",
            PayFrequency::Monthly => "Monthly",
        }
    }

    /// Serde helper that maps unknown or missing values to the default
    /// instead of rejecting the whole document.
    pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(match raw {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Falling back to default frequency: {}", e);
                PayFrequency::default()
            }),
            None => PayFrequency::default(),
        })
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayFrequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        PayFrequency::ALL
            .into_iter()
            .find(|frequency| frequency.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidField {
                field: "frequency",
                message: format!(
                    "Unknown pay frequency '{}', expected Weekly, Bi-weekly or Monthly",
                    s
                ),
            })
    }
}

/// Persisted pay-cycle settings. One per installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PayCycleConfig {
    #[serde(default, with = "iso_date_opt")]
    pub last_pay_date: Option<NaiveDate>,
    #[serde(default)]
    pub frequency: PayFrequency,
}

/// Form input for the pay-cycle settings.
///
/// `frequency` stays a string here so an unrecognized value is reported as a
/// field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayCycleInput {
    #[serde(default, with = "iso_date_opt")]
    pub last_pay_date: Option<NaiveDate>,
    pub frequency: String,
}

impl PayCycleInput {
    pub fn into_config(self) -> Result<PayCycleConfig> {
        let frequency = self.frequency.parse::<PayFrequency>()?;
        Ok(PayCycleConfig {
            last_pay_date: self.last_pay_date,
            frequency,
        })
    }
}

/// Pay-cycle settings together with the projection derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayCycleView {
    #[serde(flatten)]
    pub config: PayCycleConfig,
    #[serde(with = "iso_date_opt")]
    pub next_pay_date: Option<NaiveDate>,
    pub upcoming_pay_dates: Vec<NaiveDate>,
}
