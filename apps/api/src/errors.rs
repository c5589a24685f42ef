use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Channel name not present in the static registry. A contract violation
    /// by the caller, never silently skipped.
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    /// No locale had content for any selected channel.
    #[error("Nothing to generate")]
    EmptyGeneration,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnknownChannel(name) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNKNOWN_CHANNEL",
                format!("Channel '{name}' is not in the registry"),
            ),
            AppError::EmptyGeneration => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_GENERATION",
                "No locale has content to generate from".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
