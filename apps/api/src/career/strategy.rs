//! Derivation strategies — pluggable, trait-based sources of career suggestions.
//!
//! Primary: `ModelSuggestionSource` (local generation server + strict parser).
//! Fallback: `catalog::rule_based_suggestions`, which is infallible and therefore
//! called directly by the engine rather than through this trait.
//!
//! `AppState` holds an `Option<Arc<dyn SuggestionSource>>`; `None` forces the fallback.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::career::models::{CareerSuggestion, Profile};
use crate::career::parser::parse_model_output;
use crate::career::prompts::build_suggestion_prompt;
use crate::llm_client::{LlmClient, LlmError};

/// Why a strategy produced nothing. Recovered by the fallback, never shown to callers.
#[derive(Debug, Error)]
pub enum DerivationError {
    #[error("model upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] LlmError),

    #[error("unparsable model output: {0}")]
    UnparsableModelOutput(String),
}

/// Implement this to add a derivation backend without touching the engine or handlers.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self, profile: &Profile) -> Result<Vec<CareerSuggestion>, DerivationError>;

    /// Short backend label for logs.
    fn name(&self) -> &'static str;
}

/// Asks the generation server for suggestions and validates the answer.
pub struct ModelSuggestionSource {
    llm: LlmClient,
}

impl ModelSuggestionSource {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SuggestionSource for ModelSuggestionSource {
    async fn suggest(&self, profile: &Profile) -> Result<Vec<CareerSuggestion>, DerivationError> {
        let prompt = build_suggestion_prompt(profile);
        debug!(
            "Requesting suggestions from {} (prompt_chars={})",
            self.llm.model(),
            prompt.len()
        );

        let text = self.llm.generate(&prompt).await?;
        parse_model_output(&text)
    }

    fn name(&self) -> &'static str {
        "model"
    }
}
