use std::sync::Arc;

use sqlx::PgPool;

use crate::probability::estimator::ProbabilityEstimator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable probability estimator. Default: LlmEstimator over the shared LLM client.
    pub estimator: Arc<dyn ProbabilityEstimator>,
}
