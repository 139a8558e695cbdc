use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Local;
use financeflow_core::dashboard::DashboardSummary;
use financeflow_core::utils::time_utils::parse_iso_date;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardQuery {
    /// Reference date for the upcoming-expense window; defaults to today.
    as_of: Option<String>,
}

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<DashboardSummary>> {
    let today = match query.as_of.as_deref() {
        Some(raw) => parse_iso_date(raw).map_err(financeflow_core::Error::from)?,
        None => Local::now().date_naive(),
    };
    let summary = DashboardSummary::build(
        &state.account_store.list()?,
        &state.expense_store.list()?,
        &state.goal_store.list()?,
        state.pay_cycle_service.next_pay_date()?,
        today,
    );
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
