use anyhow::{ensure, Context, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// Every OpenAI setting is optional: without a key the service answers from the local fallback.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub openai_temperature: Option<f32>,
    pub openai_base_url: String,
    pub static_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let openai_temperature = optional_env("OPENAI_TEMPERATURE")
            .map(|raw| parse_temperature(&raw))
            .transpose()?;

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_model: optional_env("OPENAI_MODEL"),
            openai_temperature,
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            static_dir: optional_env("STATIC_DIR").unwrap_or_else(|| "public".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a temperature override. `NaN` and infinities parse as `f32` but cannot be sent.
fn parse_temperature(raw: &str) -> Result<f32> {
    let temperature = raw
        .parse::<f32>()
        .with_context(|| format!("OPENAI_TEMPERATURE must be a number, got '{raw}'"))?;
    ensure!(
        temperature.is_finite(),
        "OPENAI_TEMPERATURE must be a finite number, got '{raw}'"
    );
    Ok(temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_temperature_accepts_numbers() {
        assert_eq!(parse_temperature("0.2").unwrap(), 0.2);
        assert_eq!(parse_temperature("1").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_temperature_rejects_garbage() {
        assert!(parse_temperature("warm").is_err());
    }

    #[test]
    fn test_parse_temperature_rejects_non_finite_values() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity"] {
            let err = parse_temperature(raw).unwrap_err();
            assert!(
                err.to_string().contains("finite"),
                "{raw} should be rejected as non-finite, got: {err}"
            );
        }
    }
}
