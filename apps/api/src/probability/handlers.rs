use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::probability::models::ProbabilityRecord;
use crate::probability::store;
use crate::probability::synthesizer::synthesize_prompt;
use crate::questionnaire::completion::evaluate_completion;
use crate::questionnaire::store as questionnaire_store;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ProbabilityRequest {
    pub email: String,
}

/// POST /api/v1/probability
/// The full pipeline: fetch -> completion gate -> synthesize -> estimate ->
/// overwrite the stored report.
pub async fn handle_compute_probability(
    State(state): State<AppState>,
    Json(req): Json<ProbabilityRequest>,
) -> Result<Json<ProbabilityRecord>, AppError> {
    let row = questionnaire_store::fetch_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| AppError::NotFound("No record found for this email.".to_string()))?;
    let record = row.record()?;

    let status = evaluate_completion(&record);
    if !status.is_complete() {
        return Err(AppError::UnprocessableEntity(
            "Complete all questions before requesting a probability estimate.".to_string(),
        ));
    }

    let prompt = synthesize_prompt(&record)?;
    let report = state.estimator.estimate(&prompt).await?;
    store::upsert_report(&state.db, &req.email, &report).await?;

    info!("Probability report computed for {}", req.email);
    Ok(Json(ProbabilityRecord {
        email: row.email,
        report,
    }))
}

/// GET /api/v1/probability/:email
pub async fn handle_get_probability(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<ProbabilityRecord>, AppError> {
    let row = store::fetch_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No probability report for {email}")))?;
    Ok(Json(ProbabilityRecord::from_row(&row)?))
}

#[derive(Serialize)]
pub struct PromptPreviewResponse {
    pub email: String,
    pub prompt: String,
}

/// GET /api/v1/probability/prompt/:email
/// Renders the prompt without calling the model. Debugging aid; the record
/// does not need to be complete, only renderable.
pub async fn handle_preview_prompt(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<PromptPreviewResponse>, AppError> {
    let row = questionnaire_store::fetch_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| AppError::NotFound("No record found for this email.".to_string()))?;
    let prompt = synthesize_prompt(&row.record()?)?;
    Ok(Json(PromptPreviewResponse { email, prompt }))
}
