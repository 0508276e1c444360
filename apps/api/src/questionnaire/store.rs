use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::info;

use crate::models::questionnaire::QuestionnaireRow;
use crate::questionnaire::models::SectionName;

pub async fn fetch_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<QuestionnaireRow>, sqlx::Error> {
    Ok(
        sqlx::query_as::<_, QuestionnaireRow>("SELECT * FROM questionnaires WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?,
    )
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<QuestionnaireRow>, sqlx::Error> {
    Ok(sqlx::query_as::<_, QuestionnaireRow>(
        "SELECT * FROM questionnaires ORDER BY created_at ASC",
    )
    .fetch_all(pool)
    .await?)
}

/// Shallow-merges a section payload into the record, creating the record on
/// the first submission of any section. Returns the saved row and whether it
/// was newly created.
///
/// Concurrent saves for one email race read-modify-write; last write wins.
pub async fn upsert_section(
    pool: &PgPool,
    email: &str,
    part: SectionName,
    patch: &Value,
) -> Result<(QuestionnaireRow, bool), sqlx::Error> {
    let existing = fetch_by_email(pool, email).await?;
    let created = existing.is_none();

    let mut data = existing.map(|row| row.data).unwrap_or_else(|| json!({}));
    merge_section(&mut data, part, patch);

    let row = sqlx::query_as::<_, QuestionnaireRow>(
        r#"
        INSERT INTO questionnaires (email, data)
        VALUES ($1, $2)
        ON CONFLICT (email) DO UPDATE
            SET data = EXCLUDED.data, updated_at = now()
        RETURNING *
        "#,
    )
    .bind(email)
    .bind(&data)
    .fetch_one(pool)
    .await?;

    info!("Saved section '{}' for {email}", part.as_str());
    Ok((row, created))
}

/// Overlays the incoming section fields onto the stored section object.
/// Submitted fields overwrite matching keys; non-submitted fields are left
/// untouched.
fn merge_section(data: &mut Value, part: SectionName, patch: &Value) {
    if !data.is_object() {
        *data = json!({});
    }
    if let Some(root) = data.as_object_mut() {
        let section = root.entry(part.as_str()).or_insert_with(|| json!({}));
        if !section.is_object() {
            *section = json!({});
        }
        if let (Some(target), Some(fields)) = (section.as_object_mut(), patch.as_object()) {
            for (key, value) in fields {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_creates_section() {
        let mut data = json!({});
        merge_section(
            &mut data,
            SectionName::Demographic,
            &json!({"age": "25", "gender": "F"}),
        );
        assert_eq!(data, json!({"demographic": {"age": "25", "gender": "F"}}));
    }

    #[test]
    fn test_merge_overwrites_matching_keys_only() {
        let mut data = json!({"demographic": {"age": "25", "gender": "F"}});
        merge_section(&mut data, SectionName::Demographic, &json!({"age": "26"}));
        assert_eq!(data, json!({"demographic": {"age": "26", "gender": "F"}}));
    }

    #[test]
    fn test_merge_leaves_other_sections_untouched() {
        let mut data = json!({"demographic": {"age": "25", "gender": "F"}});
        merge_section(
            &mut data,
            SectionName::TechnicalSkills,
            &json!({"python": 3}),
        );
        assert_eq!(data["demographic"]["age"], json!("25"));
        assert_eq!(data["technical_skills"]["python"], json!(3));
    }

    #[test]
    fn test_merge_replaces_non_object_section() {
        let mut data = json!({"resume": 7});
        merge_section(&mut data, SectionName::Resume, &json!({"length": 1}));
        assert_eq!(data, json!({"resume": {"length": 1}}));
    }
}
