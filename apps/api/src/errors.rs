use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

const GENERIC_SERVER_ERROR: &str = "Unexpected server error";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Completion(#[from] LlmError),

    /// Body rejections that are not about the bullet itself, such as an oversized payload.
    #[error(transparent)]
    Rejected(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Completion(e) => {
                tracing::error!("Completion error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, server_message(e.to_string()))
            }
            AppError::Rejected(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Server errors always carry some text, even when the underlying error has none.
fn server_message(message: String) -> String {
    if message.trim().is_empty() {
        GENERIC_SERVER_ERROR.to_string()
    } else {
        message
    }
}
