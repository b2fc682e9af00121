//! Bullet improvement orchestrator.
//!
//! Flow: no completion client → local fallback.
//!       otherwise → build prompt → one completion call → normalize lines →
//!       pad from fallback / truncate to exactly three.
//!
//! A failed completion call is returned to the caller; only a missing client routes
//! to the fallback.

use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::improve::fallback::local_fallback;
use crate::improve::prompts::{build_prompt, SYSTEM_PROMPT};
use crate::improve::style::Style;
use crate::llm_client::{ChatMessage, ChatRequest, CompletionClient, LlmError};

/// Model used when no override is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Placeholder model name that is treated as "no override".
const RESERVED_MODEL: &str = "gpt-5";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Characters stripped from the start of each completion line.
const LIST_MARKERS: &[char] = &['-', '*', '\u{2022}', '.', '(', ')'];

/// Exactly three rewritten variants of one bullet.
pub type Variations = [String; 3];

/// Model settings resolved once from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f32,
}

impl CompletionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: resolve_model(config.openai_model.as_deref()),
            temperature: config.openai_temperature.unwrap_or(DEFAULT_TEMPERATURE),
        }
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

fn resolve_model(configured: Option<&str>) -> String {
    match configured {
        Some(model) if !model.is_empty() && model != RESERVED_MODEL => model.to_string(),
        _ => DEFAULT_MODEL.to_string(),
    }
}

/// Turns a bullet and a style into three variants.
///
/// Built once at startup; `client` is `None` when no API key is configured or the
/// HTTP client could not be constructed.
#[derive(Clone)]
pub struct Improver {
    client: Option<Arc<dyn CompletionClient>>,
    settings: CompletionSettings,
}

impl Improver {
    pub fn new(client: Option<Arc<dyn CompletionClient>>, settings: CompletionSettings) -> Self {
        Self { client, settings }
    }

    /// Which path answers requests: `"completion"` or `"fallback"`.
    pub fn mode(&self) -> &'static str {
        if self.client.is_some() {
            "completion"
        } else {
            "fallback"
        }
    }

    pub async fn generate(&self, bullet: &str, style: Style) -> Result<Variations, LlmError> {
        let Some(client) = &self.client else {
            debug!(%style, "no completion client; using local fallback");
            return Ok(local_fallback(bullet, style));
        };

        let request = ChatRequest {
            model: self.settings.model.clone(),
            temperature: self.settings.temperature,
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_prompt(bullet, style)),
            ],
        };

        let content = client.complete(request).await?;
        let lines = normalize_lines(&content);
        debug!(%style, usable_lines = lines.len(), "completion normalized");

        Ok(take_three(lines, bullet, style))
    }
}

/// Splits completion text into lines, strips leading list markers, and drops empties.
pub fn normalize_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c: char| {
                    c.is_ascii_digit() || c.is_whitespace() || LIST_MARKERS.contains(&c)
                })
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Keeps the first three model lines, filling any missing slots from the fallback.
fn take_three(lines: Vec<String>, bullet: &str, style: Style) -> Variations {
    let mut combined = lines.into_iter().chain(local_fallback(bullet, style));
    std::array::from_fn(|_| combined.next().unwrap_or_default())
}
