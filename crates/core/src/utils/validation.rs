//! Field-level validation helpers shared by the entity input types.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::errors::{Error, Result};

pub fn require_text(field: &'static str, value: &str, label: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_field(field, format!("{} is required", label)));
    }
    Ok(())
}

pub fn require_positive(field: &'static str, value: Decimal, label: &str) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(Error::invalid_field(
            field,
            format!("{} must be greater than 0", label),
        ));
    }
    Ok(())
}

pub fn require_non_negative(field: &'static str, value: Decimal, label: &str) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(Error::invalid_field(
            field,
            format!("{} cannot be negative", label),
        ));
    }
    Ok(())
}

/// Trims optional free text, mapping blank values to `None`.
pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Serde helper: decodes `""`, whitespace and `null` as `None`.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize_optional_text(raw))
}
