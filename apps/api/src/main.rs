mod config;
mod errors;
mod improve;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::improve::generator::{CompletionSettings, Improver};
use crate::llm_client::{CompletionClient, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Bullet Improver v{}", env!("CARGO_PKG_VERSION"));

    let settings = CompletionSettings::from_config(&config);
    let client = build_completion_client(&config);
    if client.is_some() {
        info!(
            "Completion client initialized (model: {}, temperature: {})",
            settings.model, settings.temperature
        );
    }

    let state = AppState {
        improver: Improver::new(client, settings),
    };

    let app = build_router(state, &config.static_dir)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Bullet Improver listening on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the completion client, or `None` so every request uses the local fallback.
fn build_completion_client(config: &Config) -> Option<Arc<dyn CompletionClient>> {
    let Some(api_key) = config.openai_api_key.clone() else {
        warn!("OPENAI_API_KEY not set; using local fallback");
        return None;
    };

    match LlmClient::new(api_key, &config.openai_base_url) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("Completion client unavailable ({e}); using local fallback");
            None
        }
    }
}
