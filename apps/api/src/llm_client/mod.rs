/// LLM Client — the single point of entry for calls to the local text-generation server.
///
/// ARCHITECTURAL RULE: No other module may talk to the generation endpoint directly.
///
/// One request per call. No retries: callers fall back to the rule catalog instead.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::LlmConfig;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: SamplingOptions,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct SamplingOptions {
    temperature: f32,
    top_p: f32,
    /// Generation length cap.
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct ServerError {
    error: String,
}

/// Client for the generation endpoint. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    model: String,
    timeout_secs: u64,
    options: SamplingOptions,
}

impl LlmClient {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
            options: SamplingOptions {
                temperature: config.temperature,
                top_p: config.top_p,
                num_predict: config.max_tokens,
            },
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` and returns the raw completion text.
    /// Any non-2xx status, timeout or empty completion is an error.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: self.options,
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ServerError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await.map_err(|e| self.classify(e))?;

        debug!(
            "LLM call succeeded: model={}, response_chars={}",
            self.model,
            body.response.len()
        );

        if body.response.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        Ok(body.response)
    }

    fn classify(&self, error: reqwest::Error) -> LlmError {
        if error.is_timeout() {
            LlmError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            LlmError::Http(error)
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(|s| s.trim())
                .unwrap_or(stripped)
        }
        None => text,
    }
}
