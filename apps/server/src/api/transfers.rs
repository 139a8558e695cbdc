use std::sync::Arc;

use crate::{
    api::shared::{mutation, run_blocking, MutationResponse},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use financeflow_core::pay_cycle::PayFrequency;
use financeflow_core::transfers::{Transfer, TransferInput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransferFrequencyBody {
    transfer_frequency: String,
}

impl From<PayFrequency> for TransferFrequencyBody {
    fn from(frequency: PayFrequency) -> Self {
        Self {
            transfer_frequency: frequency.as_str().to_string(),
        }
    }
}

async fn list_transfers(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Transfer>>> {
    Ok(Json(state.transfer_service.list()?))
}

async fn get_transfer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Transfer>> {
    Ok(Json(state.transfer_service.get(&id)?))
}

async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TransferInput>,
) -> ApiResult<Json<MutationResponse<Transfer>>> {
    let outcome = run_blocking(move || state.transfer_service.create(input)).await?;
    Ok(mutation(outcome))
}

async fn update_transfer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<TransferInput>,
) -> ApiResult<Json<MutationResponse<Transfer>>> {
    let outcome = run_blocking(move || state.transfer_service.update(&id, input)).await?;
    Ok(mutation(outcome))
}

async fn delete_transfer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MutationResponse<Transfer>>> {
    let outcome = run_blocking(move || state.transfer_service.delete(&id)).await?;
    Ok(mutation(outcome))
}

async fn get_transfer_frequency(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TransferFrequencyBody>> {
    Ok(Json(state.transfer_service.transfer_frequency()?.into()))
}

async fn set_transfer_frequency(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TransferFrequencyBody>,
) -> ApiResult<Json<MutationResponse<TransferFrequencyBody>>> {
    let frequency: PayFrequency = body
        .transfer_frequency
        .parse()
        .map_err(financeflow_core::Error::from)?;
    let outcome = run_blocking(move || state.transfer_service.set_transfer_frequency(frequency)).await?;
    Ok(mutation(outcome.map(TransferFrequencyBody::from)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transfers", get(list_transfers).post(create_transfer))
        .route(
            "/transfers/frequency",
            get(get_transfer_frequency).put(set_transfer_frequency),
        )
        .route(
            "/transfers/{id}",
            get(get_transfer).put(update_transfer).delete(delete_transfer),
        )
}
