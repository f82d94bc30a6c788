pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::career::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career API
        .route(
            "/api/v1/career/suggestions",
            post(handlers::handle_suggest),
        )
        .route(
            "/api/v1/career/archetypes",
            get(handlers::handle_list_archetypes),
        )
        .with_state(state)
}
