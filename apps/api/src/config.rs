use anyhow::{Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// Read once at startup; the API key is handed to `LlmClient` at wiring time.
#[derive(Clone)]
pub struct Config {
    /// Completion-service credential. May be empty: the provider rejects the
    /// first call instead of the service refusing to boot.
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    raw.unwrap_or("8000")
        .parse::<u16>()
        .context("PORT must be a valid port number")
}
