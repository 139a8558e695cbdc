//! Goal progress calculations. Progress is always derived, never stored.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::goals_model::Goal;
use crate::utils::decimal_utils::{saturated, saturating_sum};

/// Percent of `target` reached by `current`.
///
/// Returns `0` when `target` is zero or negative. The value is not clamped:
/// an overshoot such as 150 passes through so callers can detect it. A ratio
/// too large to represent saturates at `Decimal::MAX` (or `Decimal::MIN` for
/// a negative current amount).
pub fn goal_progress_percent(current: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    current
        .checked_div(target)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or_else(|| saturated(current >= Decimal::ZERO))
}

/// Derived progress view of a single goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub name: String,
    pub percent: Decimal,
    /// Amount still missing, never below zero.
    pub remaining: Decimal,
    pub is_complete: bool,
}

impl GoalProgress {
    pub fn for_goal(goal: &Goal) -> Self {
        let remaining = goal
            .target_amount
            .saturating_sub(goal.current_amount)
            .max(Decimal::ZERO);
        GoalProgress {
            goal_id: goal.id.clone(),
            name: goal.name.clone(),
            percent: goal_progress_percent(goal.current_amount, goal.target_amount),
            remaining,
            is_complete: goal.target_amount > Decimal::ZERO
                && goal.current_amount >= goal.target_amount,
        }
    }
}

/// Aggregate progress across all goals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalsOverview {
    pub goal_count: usize,
    pub completed_count: usize,
    pub total_saved: Decimal,
    pub total_target: Decimal,
    pub overall_percent: Decimal,
}

impl GoalsOverview {
    pub fn from_goals(goals: &[Goal]) -> Self {
        let total_saved = saturating_sum(goals.iter().map(|goal| goal.current_amount));
        let total_target = saturating_sum(goals.iter().map(|goal| goal.target_amount));
        let completed_count = goals
            .iter()
            .filter(|goal| GoalProgress::for_goal(goal).is_complete)
            .count();
        GoalsOverview {
            goal_count: goals.len(),
            completed_count,
            total_saved,
            total_target,
            overall_percent: goal_progress_percent(total_saved, total_target),
        }
    }
}
