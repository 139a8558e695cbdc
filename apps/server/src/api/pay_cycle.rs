use std::sync::Arc;

use crate::{
    api::shared::{mutation, run_blocking, MutationResponse},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use financeflow_core::pay_cycle::{PayCycleInput, PayCycleView};

async fn get_pay_cycle(State(state): State<Arc<AppState>>) -> ApiResult<Json<PayCycleView>> {
    Ok(Json(state.pay_cycle_service.view()?))
}

async fn update_pay_cycle(
    State(state): State<Arc<AppState>>,
    Json(input): Json<PayCycleInput>,
) -> ApiResult<Json<MutationResponse<PayCycleView>>> {
    let outcome = run_blocking(move || state.pay_cycle_service.update(input)).await?;
    Ok(mutation(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/pay-cycle", get(get_pay_cycle).put(update_pay_cycle))
}
