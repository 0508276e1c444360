use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;

use crate::models::probability::ProbabilityRow;
use crate::probability::models::ProbabilityReport;

pub async fn fetch_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<ProbabilityRow>, sqlx::Error> {
    Ok(
        sqlx::query_as::<_, ProbabilityRow>("SELECT * FROM probability_reports WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?,
    )
}

/// Stores the report for an email. Any previous report is entirely
/// overwritten; no history is retained.
pub async fn upsert_report(
    pool: &PgPool,
    email: &str,
    report: &ProbabilityReport,
) -> Result<ProbabilityRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ProbabilityRow>(
        r#"
        INSERT INTO probability_reports
            (email, probability_3_months, probability_6_months,
             probability_9_months, probability_9_plus_months, suggestions, skills)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (email) DO UPDATE SET
            probability_3_months = EXCLUDED.probability_3_months,
            probability_6_months = EXCLUDED.probability_6_months,
            probability_9_months = EXCLUDED.probability_9_months,
            probability_9_plus_months = EXCLUDED.probability_9_plus_months,
            suggestions = EXCLUDED.suggestions,
            skills = EXCLUDED.skills,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(email)
    .bind(&report.three_months)
    .bind(&report.six_months)
    .bind(&report.nine_months)
    .bind(&report.nine_plus_months)
    .bind(Json(&report.suggestions))
    .bind(Json(&report.skills))
    .fetch_one(pool)
    .await?;

    info!("Stored probability report for {email}");
    Ok(row)
}
