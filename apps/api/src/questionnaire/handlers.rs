use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::questionnaire::QuestionnaireDoc;
use crate::questionnaire::completion::{evaluate_completion, CompletionStatus};
use crate::questionnaire::models::{validate_section, SectionName};
use crate::questionnaire::store;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<QuestionnaireDoc>,
    pub completion_status: CompletionStatus,
}

/// POST /api/v1/login
/// Returns the stored record (if any) plus the per-section completion map.
/// An unknown email is not an error: the frontend gets an all-false map.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    match store::fetch_by_email(&state.db, &req.email).await? {
        Some(row) => {
            let record = row.record()?;
            let completion_status = evaluate_completion(&record);
            Ok(Json(LoginResponse {
                message: "Responses:".to_string(),
                data: Some(QuestionnaireDoc {
                    email: row.email,
                    record,
                }),
                completion_status,
            }))
        }
        None => Ok(Json(LoginResponse {
            message: "No record found for this email.".to_string(),
            data: None,
            completion_status: CompletionStatus::default(),
        })),
    }
}

#[derive(Deserialize)]
pub struct SaveFormRequest {
    pub email: String,
    pub part: SectionName,
    pub data: Value,
}

#[derive(Serialize)]
pub struct SaveFormResponse {
    pub message: String,
    pub data: QuestionnaireDoc,
}

/// POST /api/v1/questionnaire
/// Shallow-merges one section's fields into the record; 201 on first
/// submission, 200 on update.
pub async fn handle_save_form(
    State(state): State<AppState>,
    Json(req): Json<SaveFormRequest>,
) -> Result<(StatusCode, Json<SaveFormResponse>), AppError> {
    if req.email.is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }
    if !req.data.is_object() {
        return Err(AppError::Validation(
            "section payload must be a JSON object".to_string(),
        ));
    }
    validate_section(req.part, &req.data).map_err(|e| {
        AppError::Validation(format!("invalid '{}' payload: {e}", req.part.as_str()))
    })?;

    let (row, created) = store::upsert_section(&state.db, &req.email, req.part, &req.data).await?;
    let data = QuestionnaireDoc::from_row(&row)?;

    let (status, message) = if created {
        (StatusCode::CREATED, "Data received and saved")
    } else {
        (StatusCode::OK, "Data updated successfully")
    };
    Ok((
        status,
        Json(SaveFormResponse {
            message: message.to_string(),
            data,
        }),
    ))
}

#[derive(Serialize)]
pub struct QuestionnaireListResponse {
    pub data: Vec<QuestionnaireDoc>,
}

/// GET /api/v1/questionnaire
pub async fn handle_read_all(
    State(state): State<AppState>,
) -> Result<Json<QuestionnaireListResponse>, AppError> {
    let rows = store::list_all(&state.db).await?;
    let data = rows
        .iter()
        .map(QuestionnaireDoc::from_row)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Json(QuestionnaireListResponse { data }))
}
