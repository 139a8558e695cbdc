/// Document key holding the account list.
pub const ACCOUNTS_STORAGE_KEY: &str = "financeflow_accounts";

/// Document key holding the pay-cycle configuration.
pub const PAY_CYCLE_STORAGE_KEY: &str = "financeflow_payCycle";

/// Document key holding the recurring expense list.
pub const EXPENSES_STORAGE_KEY: &str = "financeflow_expenses";

/// Document key holding the savings goal list.
pub const GOALS_STORAGE_KEY: &str = "financeflow_goals";

/// Document key holding transfers plus the default transfer frequency.
pub const TRANSFERS_STORAGE_KEY: &str = "financeflow_transfers_data";

/// Window used by the dashboard for upcoming expense due dates.
pub const UPCOMING_EXPENSE_WINDOW_DAYS: u64 = 30;

/// Decimal places kept for normalized monetary aggregates.
pub const MONEY_SCALE: u32 = 2;
