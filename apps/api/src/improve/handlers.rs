//! Axum route handler for the improve API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::improve::generator::Variations;
use crate::improve::style::Style;
use crate::state::AppState;

const INVALID_BULLET: &str = "Invalid \"bullet\". Provide a non-empty string.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Fields are loose JSON values so that a wrongly-typed `bullet` gets the
/// validation message instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ImproveRequest {
    pub bullet: Option<Value>,
    pub style: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub results: Variations,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/improve
///
/// Returns exactly three rewrites of `bullet` in the requested style.
/// A missing or unparseable body is treated the same as a missing bullet;
/// an oversized body is rejected with 413.
pub async fn handle_improve(
    State(state): State<AppState>,
    payload: Result<Json<ImproveRequest>, JsonRejection>,
) -> Result<Json<ImproveResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(AppError::Rejected(rejection));
        }
        Err(_) => ImproveRequest::default(),
    };

    let bullet = request
        .bullet
        .as_ref()
        .and_then(Value::as_str)
        .filter(|b| !b.trim().is_empty())
        .ok_or_else(|| AppError::Validation(INVALID_BULLET.to_string()))?;

    let style = Style::resolve(request.style.as_ref().and_then(Value::as_str));

    let results = state.improver.generate(bullet, style).await?;
    info!(%style, source = state.improver.mode(), "improved bullet");

    Ok(Json(ImproveResponse { results }))
}
