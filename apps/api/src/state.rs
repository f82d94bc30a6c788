use crate::career::engine::CareerAdvisor;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Orchestrator. Holds the model source when `LLM_ENABLED`, otherwise rules only.
    pub advisor: CareerAdvisor,
}
