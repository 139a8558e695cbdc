use axum::Json;
use financeflow_core::stores::WriteOutcome;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

/// Body returned by every mutation.
///
/// `persisted` is false when the change was applied but could not be
/// saved; `warning` then carries a message for the user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse<T> {
    pub record: T,
    pub persisted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl<T> From<WriteOutcome<T>> for MutationResponse<T> {
    fn from(outcome: WriteOutcome<T>) -> Self {
        let persisted = outcome.persisted();
        let warning = outcome.storage_error.map(|e| {
            tracing::warn!("Mutation kept in memory only: {}", e);
            format!("Your change is kept for now but could not be saved: {}", e)
        });
        Self {
            record: outcome.record,
            persisted,
            warning,
        }
    }
}

pub fn mutation<T>(outcome: WriteOutcome<T>) -> Json<MutationResponse<T>> {
    Json(outcome.into())
}

/// Runs a store operation that writes to SQLite off the async executor.
pub async fn run_blocking<T, F>(operation: F) -> ApiResult<T>
where
    F: FnOnce() -> financeflow_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(|e| ApiError::Internal(format!("Storage task failed: {}", e)))?
        .map_err(ApiError::from)
}
