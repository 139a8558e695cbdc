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
use financeflow_core::accounts::{Account, AccountInput};

async fn list_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Account>>> {
    Ok(Json(state.account_store.list()?))
}

async fn get_account(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Account>> {
    Ok(Json(state.account_store.get(&id)?))
}

async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(input): Json<AccountInput>,
) -> ApiResult<Json<MutationResponse<Account>>> {
    let outcome = run_blocking(move || state.account_store.create(input)).await?;
    Ok(mutation(outcome))
}

async fn update_account(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<AccountInput>,
) -> ApiResult<Json<MutationResponse<Account>>> {
    let outcome = run_blocking(move || state.account_store.update(&id, input)).await?;
    Ok(mutation(outcome))
}

async fn delete_account(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MutationResponse<Account>>> {
    let outcome = run_blocking(move || state.account_store.delete(&id)).await?;
    Ok(mutation(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
}
