use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The eleven questionnaire sections. Wire names are the JSON keys the
/// frontend submits and the keys under which sections are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Demographic,
    Knowledge,
    SoftSkills,
    TechnicalSkills,
    WorkExperience,
    Personality,
    Networking,
    Resume,
    LinkedinProfile,
    Interviewing,
    CulturalIntelligence,
}

impl SectionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Demographic => "demographic",
            SectionName::Knowledge => "knowledge",
            SectionName::SoftSkills => "soft_skills",
            SectionName::TechnicalSkills => "technical_skills",
            SectionName::WorkExperience => "work_experience",
            SectionName::Personality => "personality",
            SectionName::Networking => "networking",
            SectionName::Resume => "resume",
            SectionName::LinkedinProfile => "linkedin_profile",
            SectionName::Interviewing => "interviewing",
            SectionName::CulturalIntelligence => "cultural_intelligence",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Demographic {
    pub age: String,
    pub gender: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Knowledge {
    #[serde(rename = "graduationDate")]
    pub graduation_date: Option<NaiveDate>,
    /// Ordered 0/1 flags against the analytics-degree label table.
    pub training_education_analytics: Vec<u8>,
    #[serde(rename = "firstJobAnalytics")]
    pub first_job_analytics: String,
    #[serde(rename = "projectsPortfolio")]
    pub projects_portfolio: String,
    #[serde(rename = "informationalInterviews")]
    pub informational_interviews: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SmallTalkTopics {
    pub politics: bool,
    pub weather: bool,
    pub hobbies: bool,
    pub movies: bool,
    pub sports: bool,
    #[serde(rename = "healthIssues")]
    pub health_issues: bool,
    #[serde(rename = "jobIssues")]
    pub job_issues: bool,
    pub salary: bool,
    pub pets: bool,
    pub stress: bool,
    pub cooking: bool,
    pub travel: bool,
    pub family: bool,
}

/// Eleven Likert scores plus the small-talk flag set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftSkills {
    pub present: u8,
    pub story: u8,
    pub convey: u8,
    pub simplify: u8,
    pub narrative: u8,
    #[serde(rename = "jobSatisfaction")]
    pub job_satisfaction: u8,
    #[serde(rename = "goalAbility")]
    pub goal_ability: u8,
    #[serde(rename = "maxEffort")]
    pub max_effort: u8,
    #[serde(rename = "hardWorkSuccess")]
    pub hard_work_success: u8,
    #[serde(rename = "goalWorry")]
    pub goal_worry: u8,
    #[serde(rename = "minWork")]
    pub min_work: u8,
    #[serde(rename = "smallTalkTopics")]
    pub small_talk_topics: SmallTalkTopics,
}

/// Proficiency levels, expected range 0–6.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalSkills {
    pub python: u8,
    pub sql: u8,
    pub excel: u8,
    #[serde(rename = "BI")]
    pub bi: u8,
    pub r: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub non_analytics_canada: f64,
    pub analytics_canada: f64,
    pub analytics_abroad: f64,
    pub first_job_date: Option<NaiveDate>,
    pub interview_offers: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Personality {
    pub persona: String,
    pub self_determination: Vec<u8>,
    pub proactivity: Vec<u8>,
    pub strategic_thinking: Vec<u8>,
    pub strategic_planning: Vec<u8>,
    pub self_awareness: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Networking {
    /// Index into the 6-entry networking-time statement table.
    pub linkedin_reaching_out: u8,
    /// Ordered opinion-strength indices (0–4), zipped positionally against
    /// the 11-entry networking statement table.
    pub understanding_networking: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeSection {
    /// Opinion-strength indices; the first two entries are rendered.
    pub job_posting_effectiveness: Vec<u8>,
    /// Index into the 3-entry resume-length table.
    pub length: u8,
    /// 0/1 flags against the 5-entry customization label table.
    pub customization: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedinProfile {
    pub persona: u32,
    pub recommendations: u32,
    pub connections: u32,
    pub approach: u32,
    pub behavioral: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewPlatforms {
    pub none: bool,
    pub leetcode: bool,
    pub coderbyte: bool,
    pub formation: bool,
    #[serde(rename = "algoExpert")]
    pub algo_expert: bool,
    #[serde(rename = "strataScratch")]
    pub strata_scratch: bool,
    #[serde(rename = "hackerRank")]
    pub hacker_rank: bool,
    #[serde(rename = "interviewQuery")]
    pub interview_query: bool,
    pub other: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Interviewing {
    pub behavioral: Vec<u8>,
    pub technical: Vec<u8>,
    pub platforms_used: InterviewPlatforms,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CulturalSmallTalkTopics {
    pub what_is_small_talk: bool,
    pub politics: bool,
    pub weather: bool,
    pub hobbies: bool,
    pub movies_performances_books: bool,
    pub cooking_meals_cuisines: bool,
    pub family_personal_issues: bool,
    pub health_issues: bool,
    pub job_issues: bool,
    pub pets: bool,
    pub salary: bool,
    pub sport_events: bool,
    pub stress_problems: bool,
    pub travel: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CulturalIntelligence {
    pub small_talk_topics: Option<CulturalSmallTalkTopics>,
    pub culture: u8,
    pub comfortable: u8,
}

/// One questionnaire per user. Sections are independently optional until
/// complete per the section predicate; the record is created on the first
/// submission of any section and mutated in place afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demographic: Option<Demographic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge: Option<Knowledge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_skills: Option<SoftSkills>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_skills: Option<TechnicalSkills>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<WorkExperience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<Personality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<Networking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_profile: Option<LinkedinProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewing: Option<Interviewing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_intelligence: Option<CulturalIntelligence>,
}

/// Checks that a merged section payload still deserializes into its typed
/// section. Rejects wrong-typed fields before they reach storage.
pub fn validate_section(part: SectionName, data: &Value) -> Result<(), serde_json::Error> {
    match part {
        SectionName::Demographic => serde_json::from_value::<Demographic>(data.clone()).map(drop),
        SectionName::Knowledge => serde_json::from_value::<Knowledge>(data.clone()).map(drop),
        SectionName::SoftSkills => serde_json::from_value::<SoftSkills>(data.clone()).map(drop),
        SectionName::TechnicalSkills => {
            serde_json::from_value::<TechnicalSkills>(data.clone()).map(drop)
        }
        SectionName::WorkExperience => {
            serde_json::from_value::<WorkExperience>(data.clone()).map(drop)
        }
        SectionName::Personality => serde_json::from_value::<Personality>(data.clone()).map(drop),
        SectionName::Networking => serde_json::from_value::<Networking>(data.clone()).map(drop),
        SectionName::Resume => serde_json::from_value::<ResumeSection>(data.clone()).map(drop),
        SectionName::LinkedinProfile => {
            serde_json::from_value::<LinkedinProfile>(data.clone()).map(drop)
        }
        SectionName::Interviewing => serde_json::from_value::<Interviewing>(data.clone()).map(drop),
        SectionName::CulturalIntelligence => {
            serde_json::from_value::<CulturalIntelligence>(data.clone()).map(drop)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_knowledge_wire_names_round_trip() {
        let knowledge: Knowledge = serde_json::from_value(json!({
            "graduationDate": "2024-06-15",
            "training_education_analytics": [0, 1, 0, 1],
            "firstJobAnalytics": "Yes",
            "projectsPortfolio": "Two",
            "informationalInterviews": "Few"
        }))
        .unwrap();
        assert_eq!(
            knowledge.graduation_date,
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
        assert_eq!(knowledge.training_education_analytics, vec![0, 1, 0, 1]);
        assert_eq!(knowledge.projects_portfolio, "Two");
    }

    #[test]
    fn test_technical_skills_bi_rename() {
        let skills: TechnicalSkills =
            serde_json::from_value(json!({"python": 3, "BI": 5})).unwrap();
        assert_eq!(skills.bi, 5);
        assert_eq!(skills.python, 3);
        // non-submitted fields default to zero
        assert_eq!(skills.sql, 0);
    }

    #[test]
    fn test_record_tolerates_missing_sections() {
        let record: QuestionnaireRecord = serde_json::from_value(json!({
            "demographic": {"age": "25", "gender": "F"}
        }))
        .unwrap();
        assert!(record.demographic.is_some());
        assert!(record.knowledge.is_none());
        assert!(record.networking.is_none());
    }

    #[test]
    fn test_section_name_round_trip() {
        let part: SectionName = serde_json::from_value(json!("cultural_intelligence")).unwrap();
        assert_eq!(part, SectionName::CulturalIntelligence);
        assert_eq!(part.as_str(), "cultural_intelligence");
    }

    #[test]
    fn test_validate_section_rejects_wrong_type() {
        let bad = json!({"python": "three"});
        assert!(validate_section(SectionName::TechnicalSkills, &bad).is_err());
        let good = json!({"python": 3});
        assert!(validate_section(SectionName::TechnicalSkills, &good).is_ok());
    }
}
