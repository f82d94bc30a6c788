//! Axum route handlers for the Career API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info_span, Instrument};

use crate::career::catalog::{catalog, ArchetypeSummary};
use crate::career::engine::RequestContext;
use crate::career::models::CareerSuggestion;
use crate::career::validation::RecommendRequest;
use crate::errors::AppError;
use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const SUGGESTION_SOURCE_HEADER: &str = "x-suggestion-source";

type SuggestionHeaders = [(&'static str, String); 2];

/// POST /api/v1/career/suggestions
///
/// Validates the profile and returns up to three suggestions. Model outages and
/// unparsable model output are absorbed by the rule catalog, so the only error a
/// caller sees is a 400 for an invalid profile.
pub async fn handle_suggest(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<(SuggestionHeaders, Json<Vec<CareerSuggestion>>), AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let ctx = RequestContext::new();
    let span = info_span!("career_suggestions", request_id = %ctx.request_id);

    let recommendation = state
        .advisor
        .recommend(&ctx, &request)
        .instrument(span)
        .await?;

    let headers = [
        (REQUEST_ID_HEADER, ctx.request_id.to_string()),
        (
            SUGGESTION_SOURCE_HEADER,
            recommendation.origin.as_str().to_string(),
        ),
    ];

    Ok((headers, Json(recommendation.suggestions)))
}

/// GET /api/v1/career/archetypes
///
/// Lists the rule catalog in priority order.
pub async fn handle_list_archetypes() -> Json<Vec<ArchetypeSummary>> {
    Json(catalog().iter().map(ArchetypeSummary::from).collect())
}
