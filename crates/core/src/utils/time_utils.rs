use chrono::{DateTime, NaiveDate};

use crate::errors::ValidationError;

/// Calendar date format used in every persisted document.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO-8601 calendar date.
///
/// Accepts a plain `YYYY-MM-DD` date as well as a full RFC 3339 timestamp,
/// in which case the date in the timestamp's own offset is kept.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.date_naive())
        .map_err(|e| ValidationError::DateTimeParse(format!("'{}': {}", raw, e)))
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Serde adapter for optional ISO-8601 dates.
///
/// Empty strings and `null` both decode to `None`.
pub mod iso_date_opt {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_some(&super::format_iso_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_iso_date(&raw)
                .map(Some)
                .map_err(de::Error::custom),
        }
    }
}
