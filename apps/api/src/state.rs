use std::sync::Arc;

use sqlx::PgPool;

use crate::advisory::extract::ScholarshipExtractor;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Pluggable scholarship parser. Default: JsonBlockExtractor.
    pub scholarship_extractor: Arc<dyn ScholarshipExtractor>,
}
