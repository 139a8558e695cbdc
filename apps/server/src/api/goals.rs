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
use financeflow_core::goals::{Goal, GoalInput, GoalProgress};

async fn list_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Goal>>> {
    Ok(Json(state.goal_store.list()?))
}

async fn get_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    Ok(Json(state.goal_store.get(&id)?))
}

/// Progress of every goal, in goal order.
async fn list_goal_progress(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GoalProgress>>> {
    let goals = state.goal_store.list()?;
    Ok(Json(goals.iter().map(GoalProgress::for_goal).collect()))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(input): Json<GoalInput>,
) -> ApiResult<Json<MutationResponse<Goal>>> {
    let outcome = run_blocking(move || state.goal_store.create(input)).await?;
    Ok(mutation(outcome))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<GoalInput>,
) -> ApiResult<Json<MutationResponse<Goal>>> {
    let outcome = run_blocking(move || state.goal_store.update(&id, input)).await?;
    Ok(mutation(outcome))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MutationResponse<Goal>>> {
    let outcome = run_blocking(move || state.goal_store.delete(&id)).await?;
    Ok(mutation(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route("/goals/progress", get(list_goal_progress))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
}
