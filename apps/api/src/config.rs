use anyhow::{anyhow, Context, Result};

use crate::generation::engine::EngineConfig;
use crate::llm_client::{ProviderConfig, ProviderKind};

const DEFAULT_DATABASE_URL: &str = "sqlite://studyhub.db?mode=rwc";

/// Application configuration loaded from environment variables.
/// Fails at startup if a selected AI provider has no API key.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub engine: EngineConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let kind = get("AI_PROVIDER")
            .unwrap_or_default()
            .parse::<ProviderKind>()
            .map_err(|e| anyhow!("AI_PROVIDER: {e}"))?;

        let api_key = match kind {
            ProviderKind::None => String::new(),
            ProviderKind::Anthropic => require(&get, "ANTHROPIC_API_KEY")?,
            ProviderKind::OpenAi => require(&get, "OPENAI_API_KEY")?,
        };

        Ok(Config {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            engine: EngineConfig {
                provider: ProviderConfig {
                    kind,
                    api_key,
                    model: get("AI_MODEL"),
                    base_url: get("OPENAI_BASE_URL"),
                },
            },
        })
    }
}

fn require(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    get(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
