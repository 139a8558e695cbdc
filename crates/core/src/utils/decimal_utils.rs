//! Overflow-free decimal helpers for derived totals.
//!
//! Stored amounts are only bounded by `Decimal` itself, so aggregates over
//! them saturate at `Decimal::MAX` / `Decimal::MIN` instead of panicking.

use rust_decimal::Decimal;

/// Sums `values`, saturating at the representable bounds.
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |total, value| total.saturating_add(value))
}

/// The bound matching the sign of an overflowed result.
pub fn saturated(positive: bool) -> Decimal {
    if positive {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}
