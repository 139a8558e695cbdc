use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use financeflow_ai::{AdviceState, SavingsAdvice, SavingsAdviceRequest};

async fn request_recommendations(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SavingsAdviceRequest>,
) -> ApiResult<Json<SavingsAdvice>> {
    let advice = state.advice_session.submit(&request).await?;
    Ok(Json(advice))
}

async fn get_session(State(state): State<Arc<AppState>>) -> Json<AdviceState> {
    Json(state.advice_session.state())
}

async fn discard_session(State(state): State<Arc<AppState>>) -> StatusCode {
    state.advice_session.discard();
    StatusCode::NO_CONTENT
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/advisor/recommendations", post(request_recommendations))
        .route("/advisor/session", get(get_session).delete(discard_session))
}
