use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status and whether the model strategy is active.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let model_strategy = if state.advisor.model_enabled() {
        "enabled"
    } else {
        "disabled"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-api",
        "model_strategy": model_strategy,
        "model": state.config.llm.model,
    }))
}
