use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Text generation backend. `LlmClient` in production, fakes in tests.
    pub generator: Arc<dyn TextGenerator>,
}
