pub mod health;
pub mod site;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::improve::handlers;
use crate::state::AppState;

/// Request bodies above this size are rejected before reaching a handler.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/robots.txt", get(site::robots_handler))
        .route("/sitemap.xml", get(site::sitemap_handler))
        .route("/api/improve", post(handlers::handle_improve))
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
