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
use financeflow_core::expenses::{Expense, ExpenseInput};

async fn list_expenses(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Expense>>> {
    Ok(Json(state.expense_store.list()?))
}

async fn get_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Expense>> {
    Ok(Json(state.expense_store.get(&id)?))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ExpenseInput>,
) -> ApiResult<Json<MutationResponse<Expense>>> {
    let outcome = run_blocking(move || state.expense_store.create(input)).await?;
    Ok(mutation(outcome))
}

async fn update_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<ExpenseInput>,
) -> ApiResult<Json<MutationResponse<Expense>>> {
    let outcome = run_blocking(move || state.expense_store.update(&id, input)).await?;
    Ok(mutation(outcome))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MutationResponse<Expense>>> {
    let outcome = run_blocking(move || state.expense_store.delete(&id)).await?;
    Ok(mutation(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}
