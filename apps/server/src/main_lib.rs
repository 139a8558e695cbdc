use std::sync::Arc;

use crate::config::Config;
use financeflow_ai::{AdviceGeneratorTrait, AdviceSession, RigAdviceGenerator, SavingsAdvisor};
use financeflow_core::{
    accounts::AccountStore,
    constants::{ACCOUNTS_STORAGE_KEY, EXPENSES_STORAGE_KEY, GOALS_STORAGE_KEY},
    expenses::ExpenseStore,
    goals::GoalStore,
    pay_cycle::PayCycleService,
    persistence::PersistenceAdapter,
    transfers::TransferService,
};
use financeflow_storage_sqlite::SqliteDocumentStore;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub account_store: Arc<AccountStore>,
    pub expense_store: Arc<ExpenseStore>,
    pub goal_store: Arc<GoalStore>,
    pub transfer_service: Arc<TransferService>,
    pub pay_cycle_service: Arc<PayCycleService>,
    pub advice_session: Arc<AdviceSession>,
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens the database and builds every store, using the configured AI provider.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let generator = Arc::new(RigAdviceGenerator::new(config.ai.clone()));
    tracing::info!(
        "Advice provider {} with model {}",
        config.ai.provider,
        config.ai.model
    );
    build_state_with_generator(config, generator)
}

pub fn build_state_with_generator(
    config: &Config,
    generator: Arc<dyn AdviceGeneratorTrait>,
) -> anyhow::Result<Arc<AppState>> {
    let store = SqliteDocumentStore::open(&config.db_path)?;
    tracing::info!("Using database at {}", config.db_path);
    let persistence = PersistenceAdapter::new(Arc::new(store));

    let account_store = Arc::new(AccountStore::load(persistence.clone(), ACCOUNTS_STORAGE_KEY));
    let expense_store = Arc::new(ExpenseStore::load(persistence.clone(), EXPENSES_STORAGE_KEY));
    let goal_store = Arc::new(GoalStore::load(persistence.clone(), GOALS_STORAGE_KEY));
    let transfer_service = Arc::new(TransferService::load(persistence.clone()));
    let pay_cycle_service = Arc::new(PayCycleService::load(persistence));

    let advice_session = Arc::new(AdviceSession::new(SavingsAdvisor::new(generator)));

    Ok(Arc::new(AppState {
        account_store,
        expense_store,
        goal_store,
        transfer_service,
        pay_cycle_service,
        advice_session,
    }))
}
