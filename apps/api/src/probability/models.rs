use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::probability::ProbabilityRow;

/// One improvement suggestion, tagged by area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub area: String,
    pub suggestion: String,
}

/// One assessed skill with its 0–1 level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub skill: String,
    #[serde(deserialize_with = "string_or_number")]
    pub level: String,
}

/// The JSON object the model is instructed to return. Field names are the
/// contract; probability and level values arrive as strings, but the model is
/// not trusted to quote numbers, so bare numbers are accepted too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbabilityReport {
    #[serde(rename = "Probability3Months", deserialize_with = "string_or_number")]
    pub three_months: String,
    #[serde(rename = "Probability6Months", deserialize_with = "string_or_number")]
    pub six_months: String,
    #[serde(rename = "Probability9Months", deserialize_with = "string_or_number")]
    pub nine_months: String,
    #[serde(
        rename = "Probability9PlusMonths",
        deserialize_with = "string_or_number"
    )]
    pub nine_plus_months: String,
    #[serde(rename = "Suggestions")]
    pub suggestions: Vec<Suggestion>,
    #[serde(rename = "Skills")]
    pub skills: Vec<SkillLevel>,
}

/// Wire shape of a stored report: email alongside the report fields.
#[derive(Debug, Clone, Serialize)]
pub struct ProbabilityRecord {
    pub email: String,
    #[serde(flatten)]
    pub report: ProbabilityReport,
}

impl ProbabilityRecord {
    pub fn from_row(row: &ProbabilityRow) -> anyhow::Result<Self> {
        Ok(ProbabilityRecord {
            email: row.email.clone(),
            report: ProbabilityReport {
                three_months: row.probability_3_months.clone(),
                six_months: row.probability_6_months.clone(),
                nine_months: row.probability_9_months.clone(),
                nine_plus_months: row.probability_9_plus_months.clone(),
                suggestions: serde_json::from_value(row.suggestions.clone())
                    .with_context(|| format!("stored suggestions for '{}' are malformed", row.email))?,
                skills: serde_json::from_value(row.skills.clone())
                    .with_context(|| format!("stored skills for '{}' are malformed", row.email))?,
            },
        })
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report_json() -> serde_json::Value {
        json!({
            "Probability3Months": "40%",
            "Probability6Months": "60%",
            "Probability9Months": "75%",
            "Probability9PlusMonths": "85%",
            "Suggestions": [
                {"area": "Networking", "suggestion": "Attend analytics meetups"}
            ],
            "Skills": [
                {"skill": "Technical Skills", "level": "0.6"}
            ]
        })
    }

    #[test]
    fn test_report_deserializes_contract_shape() {
        let report: ProbabilityReport = serde_json::from_value(report_json()).unwrap();
        assert_eq!(report.three_months, "40%");
        assert_eq!(report.suggestions[0].area, "Networking");
        assert_eq!(report.skills[0].level, "0.6");
    }

    #[test]
    fn test_report_accepts_bare_numbers() {
        let mut value = report_json();
        value["Probability3Months"] = json!(40);
        value["Skills"][0]["level"] = json!(0.6);
        let report: ProbabilityReport = serde_json::from_value(value).unwrap();
        assert_eq!(report.three_months, "40");
        assert_eq!(report.skills[0].level, "0.6");
    }

    #[test]
    fn test_report_rejects_missing_probability_key() {
        let mut value = report_json();
        value.as_object_mut().unwrap().remove("Probability9Months");
        assert!(serde_json::from_value::<ProbabilityReport>(value).is_err());
    }
}
