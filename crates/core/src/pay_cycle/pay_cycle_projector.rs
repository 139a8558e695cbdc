//! Next-payday projection.
//!
//! Monthly cycles clamp to the end of the month: a cycle anchored on Jan 31
//! is paid Feb 28 (Feb 29 in leap years), Mar 31, Apr 30 and so on. This is
//! the behavior of `NaiveDate::checked_add_months`.

use chrono::{Days, Months, NaiveDate};

use super::pay_cycle_model::PayFrequency;
use crate::errors::Result;

/// Projects the pay date following `last_pay_date`.
///
/// Returns `None` when there is no last pay date, or when the result would
/// fall outside the supported calendar range.
pub fn project_next_pay_date(
    last_pay_date: Option<NaiveDate>,
    frequency: PayFrequency,
) -> Option<NaiveDate> {
    offset(last_pay_date?, frequency, 1)
}

/// Projects from a raw frequency label. Unknown labels are a validation error.
pub fn project_with_raw_frequency(
    last_pay_date: Option<NaiveDate>,
    frequency: &str,
) -> Result<Option<NaiveDate>> {
    let frequency = frequency.parse::<PayFrequency>()?;
    Ok(project_next_pay_date(last_pay_date, frequency))
}

/// The next `count` pay dates after `last_pay_date`.
///
/// Every date is computed from the anchor rather than chained, so month-end
/// clamping in a short month does not drift the later dates.
pub fn upcoming_pay_dates(
    last_pay_date: Option<NaiveDate>,
    frequency: PayFrequency,
    count: usize,
) -> Vec<NaiveDate> {
    let Some(anchor) = last_pay_date else {
        return Vec::new();
    };
    (1..=count as u32)
        .map_while(|step| offset(anchor, frequency, step))
        .collect()
}

fn offset(anchor: NaiveDate, frequency: PayFrequency, steps: u32) -> Option<NaiveDate> {
    match frequency {
        PayFrequency::Weekly => anchor.checked_add_days(Days::new(7 * u64::from(steps))),
        PayFrequency::BiWeekly => anchor.checked_add_days(Days::new(14 * u64::from(steps))),
        PayFrequency::Monthly => anchor.checked_add_months(Months::new(steps)),
    }
}
