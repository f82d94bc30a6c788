mod career;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::career::engine::CareerAdvisor;
use crate::career::strategy::{ModelSuggestionSource, SuggestionSource};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the model source (LLM_ENABLED=false forces the rule catalog)
    let advisor = if config.llm.enabled {
        let llm = LlmClient::new(&config.llm)?;
        info!(
            "LLM client initialized (model: {}, endpoint: {}, timeout: {}s)",
            llm.model(),
            config.llm.api_url,
            config.llm.timeout_secs
        );
        let source: Arc<dyn SuggestionSource> = Arc::new(ModelSuggestionSource::new(llm));
        CareerAdvisor::new(Some(source))
    } else {
        warn!("LLM disabled; all suggestions will come from the rule catalog");
        CareerAdvisor::rules_only()
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        advisor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the web app's domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
