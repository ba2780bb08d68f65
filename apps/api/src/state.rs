use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::AnalysisClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. `GeminiClient` in production, a fake in tests.
    pub llm: Arc<dyn AnalysisClient>,
    pub config: Config,
}
