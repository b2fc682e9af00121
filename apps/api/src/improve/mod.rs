// Bullet improvement: style selection, prompt building, local fallback, and the
// orchestrator that picks between the completion API and the fallback.
// All completion calls go through llm_client.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod style;
