use serde::{Deserialize, Serialize};

use crate::questionnaire::models::{
    CulturalIntelligence, Demographic, Interviewing, Knowledge, LinkedinProfile, Networking,
    Personality, QuestionnaireRecord, ResumeSection, SoftSkills, TechnicalSkills, WorkExperience,
};

/// Per-section completion flags, keyed the way the frontend expects them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStatus {
    pub demographic: bool,
    pub knowledge: bool,
    pub soft_skills: bool,
    pub technical_skills: bool,
    pub work_experience: bool,
    pub personality: bool,
    pub networking: bool,
    pub resume: bool,
    pub linkedin_profile: bool,
    pub interviewing: bool,
    pub cultural_intelligence: bool,
}

impl CompletionStatus {
    /// The probability gate: every one of the eleven sections must be filled.
    pub fn is_complete(&self) -> bool {
        self.demographic
            && self.knowledge
            && self.soft_skills
            && self.technical_skills
            && self.work_experience
            && self.personality
            && self.networking
            && self.resume
            && self.linkedin_profile
            && self.interviewing
            && self.cultural_intelligence
    }
}

/// Evaluates every section predicate against the record. Pure read; a missing
/// section is simply incomplete.
pub fn evaluate_completion(record: &QuestionnaireRecord) -> CompletionStatus {
    CompletionStatus {
        demographic: record.demographic.as_ref().is_some_and(demographic_complete),
        knowledge: record.knowledge.as_ref().is_some_and(knowledge_complete),
        soft_skills: record.soft_skills.as_ref().is_some_and(soft_skills_complete),
        technical_skills: record
            .technical_skills
            .as_ref()
            .is_some_and(technical_skills_complete),
        work_experience: record
            .work_experience
            .as_ref()
            .is_some_and(work_experience_complete),
        personality: record.personality.as_ref().is_some_and(personality_complete),
        networking: record.networking.as_ref().is_some_and(networking_complete),
        resume: record.resume.as_ref().is_some_and(resume_complete),
        linkedin_profile: record
            .linkedin_profile
            .as_ref()
            .is_some_and(linkedin_profile_complete),
        interviewing: record
            .interviewing
            .as_ref()
            .is_some_and(interviewing_complete),
        cultural_intelligence: record
            .cultural_intelligence
            .as_ref()
            .is_some_and(cultural_intelligence_complete),
    }
}

fn demographic_complete(d: &Demographic) -> bool {
    !d.age.is_empty() && !d.gender.is_empty()
}

// firstJobAnalytics is intentionally not part of the predicate.
fn knowledge_complete(k: &Knowledge) -> bool {
    k.graduation_date.is_some()
        && !k.training_education_analytics.is_empty()
        && !k.projects_portfolio.is_empty()
        && !k.informational_interviews.is_empty()
}

// Only `present` and `story` gate this section; the other nine scores do not.
fn soft_skills_complete(s: &SoftSkills) -> bool {
    s.present != 0 && s.story != 0
}

// Any single non-zero proficiency suffices.
fn technical_skills_complete(t: &TechnicalSkills) -> bool {
    t.python != 0 || t.sql != 0 || t.r != 0 || t.bi != 0 || t.excel != 0
}

// All five fields, including the year counts: a zero-year answer fails.
fn work_experience_complete(w: &WorkExperience) -> bool {
    w.non_analytics_canada != 0.0
        && w.analytics_abroad != 0.0
        && w.analytics_canada != 0.0
        && w.first_job_date.is_some()
        && w.interview_offers != 0
}

fn personality_complete(p: &Personality) -> bool {
    !p.persona.is_empty()
        && !p.self_determination.is_empty()
        && !p.proactivity.is_empty()
        && !p.strategic_thinking.is_empty()
        && !p.strategic_planning.is_empty()
        && !p.self_awareness.is_empty()
}

fn networking_complete(n: &Networking) -> bool {
    n.linkedin_reaching_out > 0 && !n.understanding_networking.is_empty()
}

fn resume_complete(r: &ResumeSection) -> bool {
    !r.job_posting_effectiveness.is_empty() && r.length != 0 && !r.customization.is_empty()
}

fn linkedin_profile_complete(l: &LinkedinProfile) -> bool {
    l.persona != 0 && l.recommendations != 0
}

fn interviewing_complete(i: &Interviewing) -> bool {
    !i.behavioral.is_empty() && !i.technical.is_empty()
}

fn cultural_intelligence_complete(c: &CulturalIntelligence) -> bool {
    c.small_talk_topics.is_some() && c.culture != 0 && c.comfortable != 0
}
