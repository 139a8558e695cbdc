use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use financeflow_ai::AiError;
use financeflow_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Ai(#[from] AiError),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Core(CoreError::Validation(_)) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Core(CoreError::NotFound { .. }) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Core(CoreError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
            ApiError::Core(CoreError::Unexpected(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
            ApiError::Ai(e) if e.is_generation_failure() => (StatusCode::BAD_GATEWAY, e.code()),
            ApiError::Ai(AiError::Validation(_)) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Ai(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.code()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    fn field(&self) -> Option<String> {
        match self {
            ApiError::Core(CoreError::Validation(e)) | ApiError::Ai(AiError::Validation(e)) => {
                e.field().map(str::to_string)
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", code, self);
        }
        let body = Json(ErrorBody {
            code,
            message: self.to_string(),
            field: self.field(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
