#[cfg(test)]
mod tests {
    use crate::accounts::{Account, AccountType};
    use crate::dashboard::DashboardSummary;
    use crate::expenses::{Expense, ExpenseCategory, ExpenseFrequency};
    use crate::goals::Goal;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn account(id: &str, account_type: AccountType, balance: Decimal) -> Account {
        Account {
            id: id.to_string(),
            name: format!("Account {id}"),
            account_type,
            balance,
            institution: None,
        }
    }

    fn expense(
        id: &str,
        amount: Decimal,
        category: ExpenseCategory,
        frequency: ExpenseFrequency,
        next_due_date: Option<NaiveDate>,
    ) -> Expense {
        Expense {
            id: id.to_string(),
            name: format!("Expense {id}"),
            amount,
            category,
            frequency,
            next_due_date,
        }
    }

    #[test]
    fn test_net_worth_subtracts_liabilities() {
        let accounts = vec![
            account("1", AccountType::Checking, dec!(5230.50)),
            account("2", AccountType::Savings, dec!(12750.00)),
            account("3", AccountType::CreditCard, dec!(-480.25)),
            account("4", AccountType::Loan, dec!(2000)),
        ];
        let summary = DashboardSummary::build(&accounts, &[], &[], None, date(2024, 8, 1));
        assert_eq!(summary.account_count, 4);
        assert_eq!(summary.total_assets, dec!(17980.50));
        assert_eq!(summary.total_liabilities, dec!(2480.25));
        assert_eq!(summary.net_worth, dec!(15500.25));
    }

    #[test]
    fn test_totals_saturate_on_huge_balances() {
        let accounts = vec![
            account("1", AccountType::Savings, Decimal::MAX),
            account("2", AccountType::Savings, Decimal::MAX),
            account("3", AccountType::Loan, Decimal::MIN),
            account("4", AccountType::CreditCard, Decimal::MIN),
        ];
        let summary = DashboardSummary::build(&accounts, &[], &[], None, date(2024, 8, 1));
        assert_eq!(summary.total_assets, Decimal::MAX);
        assert_eq!(summary.total_liabilities, Decimal::MAX);
        assert_eq!(summary.net_worth, Decimal::ZERO);

        let debts_only = [account("5", AccountType::Loan, Decimal::MAX)];
        let summary = DashboardSummary::build(&debts_only, &[], &[], None, date(2024, 8, 1));
        assert_eq!(summary.net_worth, -Decimal::MAX);
    }

    #[test]
    fn test_huge_expenses_saturate_monthly_total() {
        let expenses = vec![
            expense("1", Decimal::MAX, ExpenseCategory::Loan, ExpenseFrequency::Monthly, None),
            expense("2", Decimal::MAX, ExpenseCategory::Loan, ExpenseFrequency::Monthly, None),
            expense("3", Decimal::MAX, ExpenseCategory::Other, ExpenseFrequency::Monthly, None),
        ];
        let summary = DashboardSummary::build(&[], &expenses, &[], None, date(2024, 8, 1));
        assert_eq!(summary.monthly_expenses, Decimal::MAX);
        assert_eq!(summary.spending_by_category[0].monthly_amount, Decimal::MAX);
    }

    #[test]
    fn test_upcoming_window_at_calendar_end() {
        let last_day = NaiveDate::MAX;
        let expenses = vec![expense(
            "1",
            dec!(10),
            ExpenseCategory::Other,
            ExpenseFrequency::Monthly,
            Some(last_day),
        )];
        let summary = DashboardSummary::build(&[], &expenses, &[], None, last_day);
        assert_eq!(summary.upcoming_expenses.len(), 1);
        assert_eq!(summary.upcoming_expenses[0].due_date, last_day);
    }

    #[test]
    fn test_monthly_spending_normalization() {
        let expenses = vec![
            expense("1", dec!(15.99), ExpenseCategory::Subscription, ExpenseFrequency::Monthly, None),
            expense("2", dec!(49.00), ExpenseCategory::Subscription, ExpenseFrequency::Monthly, None),
            expense("3", dec!(350.00), ExpenseCategory::Insurance, ExpenseFrequency::Quarterly, None),
            expense("4", dec!(120.00), ExpenseCategory::Utilities, ExpenseFrequency::Annually, None),
            expense("5", dec!(999.00), ExpenseCategory::Other, ExpenseFrequency::OneTime, None),
        ];
        let summary = DashboardSummary::build(&[], &expenses, &[], None, date(2024, 8, 1));

        assert_eq!(summary.monthly_expenses, dec!(191.66));
        let categories: Vec<_> = summary
            .spending_by_category
            .iter()
            .map(|entry| (entry.category, entry.monthly_amount))
            .collect();
        assert_eq!(
            categories,
            vec![
                (ExpenseCategory::Insurance, dec!(116.67)),
                (ExpenseCategory::Subscription, dec!(64.99)),
                (ExpenseCategory::Utilities, dec!(10.00)),
            ]
        );
    }

    #[test]
    fn test_upcoming_expenses_window() {
        let today = date(2024, 8, 1);
        let expenses = vec![
            expense("late", dec!(10), ExpenseCategory::Other, ExpenseFrequency::Monthly, Some(date(2024, 8, 31))),
            expense("soon", dec!(10), ExpenseCategory::Other, ExpenseFrequency::Monthly, Some(date(2024, 8, 15))),
            expense("past", dec!(10), ExpenseCategory::Other, ExpenseFrequency::Monthly, Some(date(2024, 7, 31))),
            expense("far", dec!(10), ExpenseCategory::Other, ExpenseFrequency::Monthly, Some(date(2024, 9, 1))),
            expense("none", dec!(10), ExpenseCategory::Other, ExpenseFrequency::Monthly, None),
        ];
        let summary = DashboardSummary::build(&[], &expenses, &[], None, today);
        let ids: Vec<_> = summary
            .upcoming_expenses
            .iter()
            .map(|expense| expense.expense_id.as_str())
            .collect();
        assert_eq!(ids, vec!["soon", "late"]);
    }

    #[test]
    fn test_goals_and_pay_date_pass_through() {
        let goals = vec![Goal {
            id: "1".to_string(),
            name: "Emergency Fund".to_string(),
            target_amount: dec!(10000),
            current_amount: dec!(9500),
            deadline: None,
            linked_account: Some("acc1".to_string()),
        }];
        let summary = DashboardSummary::build(&[], &[], &goals, Some(date(2024, 8, 16)), date(2024, 8, 1));
        assert_eq!(summary.goals.goal_count, 1);
        assert_eq!(summary.goals.overall_percent, dec!(95));
        assert_eq!(summary.next_pay_date, Some(date(2024, 8, 16)));

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["nextPayDate"], "2024-08-16");
    }

    #[test]
    fn test_empty_dashboard() {
        let summary = DashboardSummary::build(&[], &[], &[], None, date(2024, 8, 1));
        assert_eq!(summary.net_worth, Decimal::ZERO);
        assert_eq!(summary.monthly_expenses, Decimal::ZERO);
        assert!(summary.spending_by_category.is_empty());
        assert_eq!(summary.next_pay_date, None);
    }
}
