use crate::improve::generator::Improver;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds nothing mutable; every request works on its own data.
#[derive(Clone)]
pub struct AppState {
    /// Orchestrator with its optional completion client, built once at startup.
    pub improver: Improver,
}
