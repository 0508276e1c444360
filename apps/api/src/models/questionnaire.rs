use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::questionnaire::models::QuestionnaireRecord;

/// One row per user; `data` holds the eleven section objects as stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionnaireRow {
    pub email: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuestionnaireRow {
    /// Deserializes the stored section data into the typed record.
    pub fn record(&self) -> anyhow::Result<QuestionnaireRecord> {
        serde_json::from_value(self.data.clone())
            .with_context(|| format!("stored questionnaire for '{}' is malformed", self.email))
    }
}

/// Wire shape of a questionnaire: email alongside the flattened sections.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireDoc {
    pub email: String,
    #[serde(flatten)]
    pub record: QuestionnaireRecord,
}

impl QuestionnaireDoc {
    pub fn from_row(row: &QuestionnaireRow) -> anyhow::Result<Self> {
        Ok(QuestionnaireDoc {
            email: row.email.clone(),
            record: row.record()?,
        })
    }
}
