// Career recommendations: validation, model-backed derivation with a strict
// output parser, and the deterministic rule catalog it falls back to.
// All model calls go through llm_client.

pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod strategy;
pub mod validation;

/// Upper bound on suggestions returned to a caller, whatever their source.
pub const MAX_SUGGESTIONS: usize = 3;
