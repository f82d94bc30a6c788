use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_LLM_API_URL: &str = "http://localhost:11434/api/generate";
const DEFAULT_LLM_MODEL: &str = "llama3.2";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub llm: LlmConfig,
}

/// Settings for the local text-generation server.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// `false` forces the rule-based path for every request.
    pub enabled: bool,
    pub api_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: DEFAULT_LLM_API_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            timeout_secs: 10,
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 2000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = LlmConfig::default();

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm: LlmConfig {
                enabled: parse_env("LLM_ENABLED", defaults.enabled)?,
                api_url: std::env::var("LLM_API_URL").unwrap_or(defaults.api_url),
                model: std::env::var("LLM_MODEL").unwrap_or(defaults.model),
                timeout_secs: parse_env("LLM_TIMEOUT_SECS", defaults.timeout_secs)?,
                temperature: parse_env("LLM_TEMPERATURE", defaults.temperature)?,
                top_p: parse_env("LLM_TOP_P", defaults.top_p)?,
                max_tokens: parse_env("LLM_MAX_TOKENS", defaults.max_tokens)?,
            },
        })
    }
}

/// Reads `key` and parses it, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}
