//! Probability estimation — pluggable, trait-based collaborator that turns a
//! synthesized prompt into a parsed report.
//!
//! Default: `LlmEstimator` over the shared LLM client. `AppState` holds an
//! `Arc<dyn ProbabilityEstimator>`, so tests and future backends can swap the
//! collaborator without touching the handler.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::probability::models::ProbabilityReport;

#[async_trait]
pub trait ProbabilityEstimator: Send + Sync {
    async fn estimate(&self, prompt: &str) -> Result<ProbabilityReport, AppError>;
}

/// Submits the prompt to the model and parses the JSON contract. The estimate
/// is never retried here; the client's transport retry is all there is.
pub struct LlmEstimator {
    llm: LlmClient,
}

impl LlmEstimator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ProbabilityEstimator for LlmEstimator {
    async fn estimate(&self, prompt: &str) -> Result<ProbabilityReport, AppError> {
        self.llm
            .call_json(prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))
    }
}
