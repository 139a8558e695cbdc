//! Dashboard module - aggregate figures across all stores.

mod dashboard_model;

#[cfg(test)]
mod dashboard_model_tests;

pub use dashboard_model::{CategorySpending, DashboardSummary, UpcomingExpense};
