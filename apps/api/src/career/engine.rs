//! Career recommendation engine — sequences validation, the model source and the
//! rule catalog.
//!
//! Flow: validate → model source (if configured) → on any failure, rule catalog →
//!       truncate to MAX_SUGGESTIONS → return.
//!
//! No retries, no caching. Model failures are logged and absorbed; only
//! validation errors reach the caller.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::career::catalog::rule_based_suggestions;
use crate::career::models::CareerSuggestion;
use crate::career::strategy::SuggestionSource;
use crate::career::validation::{validate_request, RecommendRequest};
use crate::career::MAX_SUGGESTIONS;
use crate::errors::AppError;

/// Per-request context, created by the handler and passed down explicitly.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionOrigin {
    Model,
    Rules,
}

impl SuggestionOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionOrigin::Model => "model",
            SuggestionOrigin::Rules => "rules",
        }
    }
}

/// Final, truncated result of one recommendation request.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub suggestions: Vec<CareerSuggestion>,
    pub origin: SuggestionOrigin,
}

/// The orchestrator. `model == None` means forced fallback.
#[derive(Clone)]
pub struct CareerAdvisor {
    model: Option<Arc<dyn SuggestionSource>>,
}

impl CareerAdvisor {
    pub fn new(model: Option<Arc<dyn SuggestionSource>>) -> Self {
        Self { model }
    }

    /// Rule catalog only.
    pub fn rules_only() -> Self {
        Self { model: None }
    }

    pub fn model_enabled(&self) -> bool {
        self.model.is_some()
    }

    /// Runs the full pipeline for one request.
    ///
    /// Returns `AppError::Validation` without touching any strategy when the
    /// request is invalid. Otherwise always succeeds with 1..=MAX_SUGGESTIONS entries.
    pub async fn recommend(
        &self,
        ctx: &RequestContext,
        request: &RecommendRequest,
    ) -> Result<Recommendation, AppError> {
        let profile = validate_request(request)?;

        let (mut suggestions, origin) = match &self.model {
            Some(model) => match model.suggest(&profile).await {
                Ok(suggestions) if !suggestions.is_empty() => {
                    (suggestions, SuggestionOrigin::Model)
                }
                Ok(_) => {
                    warn!(
                        request_id = %ctx.request_id,
                        "{} source returned no suggestions, using rule catalog",
                        model.name()
                    );
                    (rule_based_suggestions(&profile), SuggestionOrigin::Rules)
                }
                Err(e) => {
                    warn!(
                        request_id = %ctx.request_id,
                        "{} source failed, using rule catalog: {e}",
                        model.name()
                    );
                    (rule_based_suggestions(&profile), SuggestionOrigin::Rules)
                }
            },
            None => (rule_based_suggestions(&profile), SuggestionOrigin::Rules),
        };

        suggestions.truncate(MAX_SUGGESTIONS);

        let elapsed_ms = (Utc::now() - ctx.received_at).num_milliseconds();
        info!(
            request_id = %ctx.request_id,
            "Derived {} suggestion(s) via {} in {}ms",
            suggestions.len(),
            origin.as_str(),
            elapsed_ms
        );

        Ok(Recommendation {
            suggestions,
            origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::catalog::catalog;
    use crate::career::models::Profile;
    use crate::career::strategy::DerivationError;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted source that counts calls.
    struct ScriptedSource {
        calls: AtomicUsize,
        answer: fn() -> Result<Vec<CareerSuggestion>, DerivationError>,
    }

    impl ScriptedSource {
        fn new(answer: fn() -> Result<Vec<CareerSuggestion>, DerivationError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                answer,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SuggestionSource for ScriptedSource {
        async fn suggest(
            &self,
            _profile: &Profile,
        ) -> Result<Vec<CareerSuggestion>, DerivationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.answer)()
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }

    fn model_suggestion(title: &str, score: u8) -> CareerSuggestion {
        let mut s = catalog()[0].template.to_suggestion();
        s.title = title.to_string();
        s.match_score = score;
        s
    }

    fn five_model_suggestions() -> Result<Vec<CareerSuggestion>, DerivationError> {
        Ok(vec![
            model_suggestion("A", 40),
            model_suggestion("B", 95),
            model_suggestion("C", 70),
            model_suggestion("D", 99),
            model_suggestion("E", 10),
        ])
    }

    fn upstream_down() -> Result<Vec<CareerSuggestion>, DerivationError> {
        Err(DerivationError::UpstreamUnavailable(LlmError::Api {
            status: 500,
            message: "boom".to_string(),
        }))
    }

    fn garbage() -> Result<Vec<CareerSuggestion>, DerivationError> {
        Err(DerivationError::UnparsableModelOutput("not json".to_string()))
    }

    fn nothing() -> Result<Vec<CareerSuggestion>, DerivationError> {
        Ok(vec![])
    }

    fn request(interests: &[&str], skills: &[&str]) -> RecommendRequest {
        RecommendRequest {
            interests: interests.iter().map(|s| s.to_string()).collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn advisor_with(source: &Arc<ScriptedSource>) -> CareerAdvisor {
        CareerAdvisor::new(Some(source.clone() as Arc<dyn SuggestionSource>))
    }

    #[tokio::test]
    async fn test_model_result_truncated_without_resorting() {
        let source = ScriptedSource::new(five_model_suggestions);
        let advisor = advisor_with(&source);

        let result = advisor
            .recommend(&RequestContext::new(), &request(&["AI"], &["Python"]))
            .await
            .unwrap();

        assert_eq!(result.origin, SuggestionOrigin::Model);
        let titles: Vec<&str> = result.suggestions.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure_falls_back_to_rules() {
        let source = ScriptedSource::new(upstream_down);
        let advisor = advisor_with(&source);

        let result = advisor
            .recommend(&RequestContext::new(), &request(&["Data Science"], &["SQL"]))
            .await
            .unwrap();

        assert_eq!(result.origin, SuggestionOrigin::Rules);
        assert_eq!(result.suggestions[0].title, "Data Scientist");
        assert_eq!(source.calls(), 1, "no retries");
    }

    #[tokio::test]
    async fn test_unparsable_output_falls_back_to_rules() {
        let source = ScriptedSource::new(garbage);
        let result = advisor_with(&source)
            .recommend(&RequestContext::new(), &request(&["Pottery"], &["Welding"]))
            .await
            .unwrap();

        assert_eq!(result.origin, SuggestionOrigin::Rules);
        assert_eq!(result.suggestions.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_model_result_falls_back_to_rules() {
        let source = ScriptedSource::new(nothing);
        let result = advisor_with(&source)
            .recommend(&RequestContext::new(), &request(&["DevOps"], &["Go"]))
            .await
            .unwrap();

        assert_eq!(result.origin, SuggestionOrigin::Rules);
        assert!(!result.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_model() {
        let source = ScriptedSource::new(five_model_suggestions);
        let advisor = advisor_with(&source);

        let err = advisor
            .recommend(&RequestContext::new(), &request(&["AI"], &[" "]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_forced_fallback_is_byte_identical_across_calls() {
        let advisor = CareerAdvisor::rules_only();
        assert!(!advisor.model_enabled());
        let req = request(&["Software Development", "Security"], &["JavaScript", "AWS"]);

        let first = advisor.recommend(&RequestContext::new(), &req).await.unwrap();
        let second = advisor.recommend(&RequestContext::new(), &req).await.unwrap();

        assert_eq!(first.origin, SuggestionOrigin::Rules);
        assert_eq!(
            serde_json::to_string(&first.suggestions).unwrap(),
            serde_json::to_string(&second.suggestions).unwrap()
        );
    }

    #[tokio::test]
    async fn test_forced_fallback_software_boundary() {
        let result = CareerAdvisor::rules_only()
            .recommend(
                &RequestContext::new(),
                &request(&["Software Development"], &["JavaScript"]),
            )
            .await
            .unwrap();
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.title == "Full Stack Developer"));
    }

    #[test]
    fn test_request_contexts_are_unique() {
        assert_ne!(RequestContext::new().request_id, RequestContext::new().request_id);
    }

    proptest! {
        #[test]
        fn forced_fallback_always_returns_one_to_three(
            interests in prop::collection::vec(
                prop_oneof![
                    Just("AI".to_string()),
                    Just("DevOps".to_string()),
                    Just("Business".to_string()),
                    Just("Cybersecurity".to_string()),
                    Just("Programming".to_string()),
                    "[A-Za-z]{1,10}",
                ],
                1..6,
            ),
            skills in prop::collection::vec("[A-Za-z.]{1,10}", 1..6),
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            let result = runtime
                .block_on(CareerAdvisor::rules_only().recommend(
                    &RequestContext::new(),
                    &RecommendRequest { interests, skills, ..Default::default() },
                ))
                .unwrap();
            prop_assert!(!result.suggestions.is_empty());
            prop_assert!(result.suggestions.len() <= MAX_SUGGESTIONS);
        }
    }
}
