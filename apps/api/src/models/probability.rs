use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Stored probability report. One row per email, entirely overwritten on
/// each computation; no history is retained.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProbabilityRow {
    pub email: String,
    pub probability_3_months: String,
    pub probability_6_months: String,
    pub probability_9_months: String,
    pub probability_9_plus_months: String,
    pub suggestions: Value,
    pub skills: Value,
    pub updated_at: DateTime<Utc>,
}
