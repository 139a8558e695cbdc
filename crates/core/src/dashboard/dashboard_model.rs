use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::accounts::Account;
use crate::constants::{MONEY_SCALE, UPCOMING_EXPENSE_WINDOW_DAYS};
use crate::expenses::{Expense, ExpenseCategory};
use crate::goals::{Goal, GoalsOverview};
use crate::utils::decimal_utils::saturating_sum;
use crate::utils::time_utils::iso_date_opt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category: ExpenseCategory,
    pub monthly_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingExpense {
    pub expense_id: String,
    pub name: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
}

/// Financial overview shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub as_of: NaiveDate,
    pub account_count: usize,
    pub total_assets: Decimal,
    /// Amount owed on credit cards and loans, as a positive number.
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
    /// Recurring expenses normalized to one month. One-time expenses are excluded.
    pub monthly_expenses: Decimal,
    pub spending_by_category: Vec<CategorySpending>,
    pub upcoming_expenses: Vec<UpcomingExpense>,
    pub goals: GoalsOverview,
    #[serde(with = "iso_date_opt")]
    pub next_pay_date: Option<NaiveDate>,
}

impl DashboardSummary {
    pub fn build(
        accounts: &[Account],
        expenses: &[Expense],
        goals: &[Goal],
        next_pay_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let (liabilities, assets): (Vec<&Account>, Vec<&Account>) = accounts
            .iter()
            .partition(|account| account.account_type.is_liability());

        let total_assets = saturating_sum(assets.iter().map(|account| account.balance));
        // Liability balances are entered either as owed (positive) or signed (negative).
        let total_liabilities =
            saturating_sum(liabilities.iter().map(|account| account.balance.abs()));

        let mut by_category: HashMap<ExpenseCategory, Decimal> = HashMap::new();
        for expense in expenses {
            let monthly = expense.monthly_amount();
            if monthly > Decimal::ZERO {
                let total = by_category.entry(expense.category).or_default();
                *total = total.saturating_add(monthly);
            }
        }
        let monthly_expenses = saturating_sum(by_category.values().copied());

        let mut spending_by_category: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(category, amount)| CategorySpending {
                category,
                monthly_amount: amount.round_dp(MONEY_SCALE),
            })
            .collect();
        spending_by_category.sort_by(|a, b| {
            b.monthly_amount
                .cmp(&a.monthly_amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        DashboardSummary {
            as_of: today,
            account_count: accounts.len(),
            total_assets,
            total_liabilities,
            net_worth: total_assets.saturating_sub(total_liabilities),
            monthly_expenses: monthly_expenses.round_dp(MONEY_SCALE),
            spending_by_category,
            upcoming_expenses: upcoming_expenses(expenses, today),
            goals: GoalsOverview::from_goals(goals),
            next_pay_date,
        }
    }
}

fn upcoming_expenses(expenses: &[Expense], today: NaiveDate) -> Vec<UpcomingExpense> {
    // Near the end of the calendar the window runs to the last representable day.
    let horizon = today
        .checked_add_days(Days::new(UPCOMING_EXPENSE_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);
    let mut upcoming: Vec<UpcomingExpense> = expenses
        .iter()
        .filter_map(|expense| {
            let due_date = expense.next_due_date?;
            (today..=horizon).contains(&due_date).then(|| UpcomingExpense {
                expense_id: expense.id.clone(),
                name: expense.name.clone(),
                amount: expense.amount,
                due_date,
            })
        })
        .collect();
    upcoming.sort_by_key(|expense| expense.due_date);
    upcoming
}
