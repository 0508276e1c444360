//! Prompt Synthesizer — deterministic rendering of a completed questionnaire
//! into the natural-language data description handed to the model.
//!
//! Three sub-renderers cover logical section groups; their outputs are
//! space-joined in fixed order and wrapped in the instruction template from
//! `prompts.rs`. All label tables are immutable module-local constants, and
//! every positional lookup is bounds-checked: a response index outside its
//! table is a `SynthesisError`, never silently rendered garbage.

use chrono::NaiveDate;
use thiserror::Error;

use crate::probability::prompts::ESTIMATE_PROMPT_TEMPLATE;
use crate::questionnaire::models::{
    Demographic, Knowledge, Networking, QuestionnaireRecord, ResumeSection, TechnicalSkills,
    WorkExperience,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("index {index} is out of range for {table} (len {len})")]
    OutOfRange {
        table: &'static str,
        index: usize,
        len: usize,
    },

    #[error("section '{0}' is missing from the record")]
    MissingSection(&'static str),
}

const ANALYTICS_DEGREE_LABELS: [&str; 4] = [
    "Has completed some analytics-related courses with no certificates",
    "Has completed some analytics-related courses with certificates",
    "Is pursuing or completed an undergraduate degree in analytics",
    "Is pursuing or completed a graduate or post-graduate degree in analytics",
];

const NETWORKING_TIME_OPTIONS: [&str; 6] = [
    "I constantly network with people irrespective of my job situation",
    "Sooner rather than later",
    "About 3 months before the contract expires",
    "I will use the network I already have rather than making new connections",
    "I will contact people if their company is hiring",
    "Why do I need to network? I will start applying for positions with my resume directly",
];

const NETWORKING_STATEMENTS: [&str; 11] = [
    "I can change my opinion when I hear good arguments",
    "If I only know someone through social media (LinkedIn, Facebook), it is inappropriate to ask them for a meeting",
    "Networking is all about finding people who can help me with my next career move",
    "I find the idea of networking with strangers challenging",
    "I feel comfortable walking up to someone I find interesting and talking to them",
    "I actively attend job fairs and professional events related to analytics",
    "I am constantly on the lookout for new ways to improve my life",
    "If I see something I dont like, I fix it",
    "I tend to let others take the initiative to start new projects",
    "I can spot a good opportunity long before others can",
    "I enjoy promoting new ideas, even when others dismiss them",
];

// Opinion phrases keep their trailing spacing; the renderers concatenate them
// verbatim, so the rendered sentences carry the same spacing as the fixed text.
const OPINION_OPTIONS: [&str; 5] = [
    "I strongly disagree that ",
    "I disagree that ",
    "I am neutral about the statement- ",
    "I agree that ",
    "I strongly agree that ",
];

const RESUME_LENGTH_OPTIONS: [&str; 3] = ["One page", "Two pages", "More than two pages"];

const RESUME_CUSTOMIZATION_OPTIONS: [&str; 5] = [
    "Values of the company",
    "Soft skills",
    "Technical skills",
    "Education required",
    "Work experience required",
];

// Index 0 doubles as the not-answered entry; out-of-range levels fall back to
// the same default rather than failing (the one lookup that must tolerate it).
const PROFICIENCY_LEVELS: [&str; 7] = [
    "Not Provided",
    "Not studied",
    "Studied but need to apply this skill",
    "Have some experience but still learning",
    "Have enough experience but require occasional support",
    "Can execute complex tasks",
    "Can train others",
];

/// Renders a completed record into the full prompt for the model.
///
/// Deterministic: identical records yield byte-identical prompts. Sections the
/// renderers require must be present; `technical_skills` and `work_experience`
/// may be absent and render their literal defaults.
pub fn synthesize_prompt(record: &QuestionnaireRecord) -> Result<String, SynthesisError> {
    let demographic = record
        .demographic
        .as_ref()
        .ok_or(SynthesisError::MissingSection("demographic"))?;
    let knowledge = record
        .knowledge
        .as_ref()
        .ok_or(SynthesisError::MissingSection("knowledge"))?;
    let networking = record
        .networking
        .as_ref()
        .ok_or(SynthesisError::MissingSection("networking"))?;
    let resume = record
        .resume
        .as_ref()
        .ok_or(SynthesisError::MissingSection("resume"))?;

    let data = [
        render_knowledge_and_demographic(knowledge, demographic)?,
        render_networking_and_resume(networking, resume)?,
        render_technical_and_work(
            record.technical_skills.as_ref(),
            record.work_experience.as_ref(),
        ),
    ]
    .join(" ");

    Ok(ESTIMATE_PROMPT_TEMPLATE.replace("{data}", &data))
}

/// Demographics plus the knowledge section as one sentence of labeled fields.
fn render_knowledge_and_demographic(
    knowledge: &Knowledge,
    demographic: &Demographic,
) -> Result<String, SynthesisError> {
    let graduation = knowledge
        .graduation_date
        .map(format_date)
        .unwrap_or_else(|| "Not provided".to_string());

    let mut degrees = Vec::new();
    for (index, &flag) in knowledge.training_education_analytics.iter().enumerate() {
        if flag == 1 {
            degrees.push(lookup(
                &ANALYTICS_DEGREE_LABELS,
                "analytics_degree_labels",
                index,
            )?);
        }
    }
    let degrees = if degrees.is_empty() {
        "None".to_string()
    } else {
        degrees.join(", ")
    };

    let first_job = if knowledge.first_job_analytics == "Yes" {
        "Yes"
    } else {
        "No"
    };

    Ok(format!(
        "Age: {}; Gender: {}; Graduation Date: {}; Analytics Degrees: {}; First Job in Analytics: {}; Projects Portfolio: {}; Informational Interviews: {}.",
        demographic.age,
        demographic.gender,
        graduation,
        degrees,
        first_job,
        projects_portfolio_text(&knowledge.projects_portfolio),
        informational_interviews_text(&knowledge.informational_interviews),
    ))
}

/// Networking opinions zipped against the statement table, then the resume
/// responses with their positional labels and kept customization flags.
fn render_networking_and_resume(
    networking: &Networking,
    resume: &ResumeSection,
) -> Result<String, SynthesisError> {
    let time = lookup(
        &NETWORKING_TIME_OPTIONS,
        "networking_time_options",
        networking.linkedin_reaching_out as usize,
    )?;

    let mut networking_prompt = format!(
        "My networking skills:\nIf my contract expires in a year, the best time for me to start networking for a new role is: {time}.\n"
    );
    let opinions = networking
        .understanding_networking
        .iter()
        .enumerate()
        .map(|(index, &response)| {
            let opinion = lookup(&OPINION_OPTIONS, "opinion_options", response as usize)?;
            let statement = lookup(&NETWORKING_STATEMENTS, "networking_statements", index)?;
            Ok(format!(" {opinion} {statement}."))
        })
        .collect::<Result<Vec<_>, SynthesisError>>()?;
    networking_prompt.push_str(&opinions.join("\n"));

    let include_everything = effectiveness_opinion(resume, 0)?;
    let avoid_exact_words = effectiveness_opinion(resume, 1)?;
    let length = lookup(
        &RESUME_LENGTH_OPTIONS,
        "resume_length_options",
        resume.length as usize,
    )?;

    let mut customization = Vec::new();
    for (index, &flag) in resume.customization.iter().enumerate() {
        if flag == 1 {
            customization.push(lookup(
                &RESUME_CUSTOMIZATION_OPTIONS,
                "resume_customization_options",
                index,
            )?);
        }
    }

    let resume_prompt = format!(
        "Resume Responses:\n For a job application, in my resume, {include_everything}I should include as many skills/job experiences as I have, and {avoid_exact_words} one should avoid using exact words mentioned in a job posting, as a hiring manager might assume that I copied their job posting into my resume. \n Resume Length: {length}\n When looking through a job posting for what a position requires, I look at:\n{}",
        customization.join(". \n")
    );

    Ok(format!("{networking_prompt}\n{resume_prompt}"))
}

/// Technical proficiency levels and work-experience counts. Both sections
/// tolerate absence, substituting their literal defaults.
fn render_technical_and_work(
    technical: Option<&TechnicalSkills>,
    work: Option<&WorkExperience>,
) -> String {
    let (bi, r, python, excel, sql) = match technical {
        Some(t) => (
            proficiency_text(t.bi),
            proficiency_text(t.r),
            proficiency_text(t.python),
            proficiency_text(t.excel),
            proficiency_text(t.sql),
        ),
        None => (
            "Not Provided",
            "Not Provided",
            "Not Provided",
            "Not Provided",
            "Not Provided",
        ),
    };

    let technical_prompt = format!(
        "Technical skills Responses:\nMy skill in B.I. is: {bi}\n    and my skill in r is: {r}\n    and my skill in python is: {python}\n    and my skill in excel is: {excel}\n    and my skill in sql is: {sql}."
    );

    let not_provided = || "Not provided".to_string();
    let (non_analytics, analytics_canada, analytics_abroad, first_job, offers) = match work {
        Some(w) => (
            w.non_analytics_canada.to_string(),
            w.analytics_canada.to_string(),
            w.analytics_abroad.to_string(),
            w.first_job_date.map(format_date).unwrap_or_else(not_provided),
            w.interview_offers.to_string(),
        ),
        None => (
            not_provided(),
            not_provided(),
            not_provided(),
            not_provided(),
            not_provided(),
        ),
    };

    let work_prompt = format!(
        "Work Experience Responses:\nMy work experience in Canada not related to data analytics: {non_analytics} years\n          and Work experience in Canada related to data analytics: {analytics_canada} years\n          and data analytics Work experience abroad: {analytics_abroad} years\n          and first job date in data analytics in Canada: {first_job}\n          and I have: {offers} interview offers."
    );

    format!("{technical_prompt}\n{work_prompt}")
}

fn lookup(
    table: &'static [&'static str],
    name: &'static str,
    index: usize,
) -> Result<&'static str, SynthesisError> {
    table.get(index).copied().ok_or(SynthesisError::OutOfRange {
        table: name,
        index,
        len: table.len(),
    })
}

fn effectiveness_opinion(
    resume: &ResumeSection,
    index: usize,
) -> Result<&'static str, SynthesisError> {
    let response = resume
        .job_posting_effectiveness
        .get(index)
        .copied()
        .ok_or(SynthesisError::OutOfRange {
            table: "resume.job_posting_effectiveness",
            index,
            len: resume.job_posting_effectiveness.len(),
        })?;
    lookup(&OPINION_OPTIONS, "opinion_options", response as usize)
}

fn proficiency_text(level: u8) -> &'static str {
    PROFICIENCY_LEVELS
        .get(level as usize)
        .copied()
        .unwrap_or("Not Provided")
}

fn projects_portfolio_text(key: &str) -> &'static str {
    match key {
        "None" => "No project portfolio",
        "One" => "1 project for portfolio",
        "Two" => "2 projects for portfolio",
        "Three" => "3 projects for portfolio",
        "MoreThanThree" => "3+ projects for portfolio",
        _ => "Not provided",
    }
}

fn informational_interviews_text(key: &str) -> &'static str {
    match key {
        "WhatIs" => "Unaware of Informational Interviews",
        "None" => "Not done Informational Interviews",
        "Few" => "Done few Informational Interviews",
        "Many" => "Done many Informational Interviews",
        _ => "Not provided",
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demographic() -> Demographic {
        Demographic {
            age: "25".to_string(),
            gender: "F".to_string(),
        }
    }

    fn knowledge() -> Knowledge {
        Knowledge {
            graduation_date: NaiveDate::from_ymd_opt(2024, 6, 15),
            training_education_analytics: vec![0, 1, 0, 1],
            first_job_analytics: "Yes".to_string(),
            projects_portfolio: "Two".to_string(),
            informational_interviews: "Few".to_string(),
        }
    }

    fn networking() -> Networking {
        Networking {
            linkedin_reaching_out: 2,
            understanding_networking: vec![4, 0],
        }
    }

    fn resume() -> ResumeSection {
        ResumeSection {
            job_posting_effectiveness: vec![3, 1],
            length: 1,
            customization: vec![1, 1, 0, 0, 0],
        }
    }

    fn full_record() -> QuestionnaireRecord {
        QuestionnaireRecord {
            demographic: Some(demographic()),
            knowledge: Some(knowledge()),
            networking: Some(networking()),
            resume: Some(resume()),
            technical_skills: Some(TechnicalSkills {
                python: 3,
                sql: 6,
                excel: 0,
                bi: 1,
                r: 0,
            }),
            work_experience: Some(WorkExperience {
                non_analytics_canada: 2.0,
                analytics_canada: 1.0,
                analytics_abroad: 3.0,
                first_job_date: NaiveDate::from_ymd_opt(2022, 1, 10),
                interview_offers: 2,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_knowledge_and_demographic_rendering() {
        let text = render_knowledge_and_demographic(&knowledge(), &demographic()).unwrap();
        assert_eq!(
            text,
            "Age: 25; Gender: F; Graduation Date: 6/15/2024; \
             Analytics Degrees: Has completed some analytics-related courses with certificates, \
             Is pursuing or completed a graduate or post-graduate degree in analytics; \
             First Job in Analytics: Yes; Projects Portfolio: 2 projects for portfolio; \
             Informational Interviews: Done few Informational Interviews."
        );
    }

    #[test]
    fn test_empty_flag_set_renders_none() {
        let mut k = knowledge();
        k.training_education_analytics = vec![0, 0, 0, 0];
        let text = render_knowledge_and_demographic(&k, &demographic()).unwrap();
        assert!(text.contains("Analytics Degrees: None;"));
    }

    #[test]
    fn test_unknown_enum_keys_render_not_provided() {
        let mut k = knowledge();
        k.projects_portfolio = "Dozens".to_string();
        k.informational_interviews = String::new();
        k.graduation_date = None;
        let text = render_knowledge_and_demographic(&k, &demographic()).unwrap();
        assert!(text.contains("Graduation Date: Not provided;"));
        assert!(text.contains("Projects Portfolio: Not provided;"));
        assert!(text.contains("Informational Interviews: Not provided."));
    }

    #[test]
    fn test_first_job_analytics_is_exact_match() {
        let mut k = knowledge();
        k.first_job_analytics = "yes".to_string();
        let text = render_knowledge_and_demographic(&k, &demographic()).unwrap();
        assert!(text.contains("First Job in Analytics: No;"));
    }

    #[test]
    fn test_flag_out_of_table_range_is_an_error() {
        let mut k = knowledge();
        k.training_education_analytics = vec![0, 0, 0, 0, 1];
        let err = render_knowledge_and_demographic(&k, &demographic()).unwrap_err();
        assert_eq!(
            err,
            SynthesisError::OutOfRange {
                table: "analytics_degree_labels",
                index: 4,
                len: 4,
            }
        );
    }

    #[test]
    fn test_networking_opinions_zip_against_statements() {
        let text = render_networking_and_resume(&networking(), &resume()).unwrap();
        assert!(text.starts_with(
            "My networking skills:\nIf my contract expires in a year, the best time for me to \
             start networking for a new role is: About 3 months before the contract expires.\n"
        ));
        assert!(text.contains(
            " I strongly agree that  I can change my opinion when I hear good arguments."
        ));
        assert!(text.contains(
            " I strongly disagree that  If I only know someone through social media (LinkedIn, \
             Facebook), it is inappropriate to ask them for a meeting."
        ));
    }

    #[test]
    fn test_resume_rendering_includes_kept_customization_labels() {
        let text = render_networking_and_resume(&networking(), &resume()).unwrap();
        assert!(text.contains(" Resume Length: Two pages\n"));
        assert!(text.contains("I look at:\nValues of the company. \nSoft skills"));
        assert!(!text.contains("Technical skills\n"));
    }

    #[test]
    fn test_networking_time_index_out_of_range() {
        let mut n = networking();
        n.linkedin_reaching_out = 6;
        let err = render_networking_and_resume(&n, &resume()).unwrap_err();
        assert_eq!(
            err,
            SynthesisError::OutOfRange {
                table: "networking_time_options",
                index: 6,
                len: 6,
            }
        );
    }

    #[test]
    fn test_opinion_index_out_of_range() {
        let mut n = networking();
        n.understanding_networking = vec![5];
        let err = render_networking_and_resume(&n, &resume()).unwrap_err();
        assert_eq!(
            err,
            SynthesisError::OutOfRange {
                table: "opinion_options",
                index: 5,
                len: 5,
            }
        );
    }

    #[test]
    fn test_more_opinions_than_statements_is_an_error() {
        let mut n = networking();
        n.understanding_networking = vec![2; 12];
        let err = render_networking_and_resume(&n, &resume()).unwrap_err();
        assert_eq!(
            err,
            SynthesisError::OutOfRange {
                table: "networking_statements",
                index: 11,
                len: 11,
            }
        );
    }

    #[test]
    fn test_short_effectiveness_array_is_an_error() {
        let mut r = resume();
        r.job_posting_effectiveness = vec![3];
        let err = render_networking_and_resume(&networking(), &r).unwrap_err();
        assert_eq!(
            err,
            SynthesisError::OutOfRange {
                table: "resume.job_posting_effectiveness",
                index: 1,
                len: 1,
            }
        );
    }

    #[test]
    fn test_resume_length_out_of_range() {
        let mut r = resume();
        r.length = 3;
        let err = render_networking_and_resume(&networking(), &r).unwrap_err();
        assert_eq!(
            err,
            SynthesisError::OutOfRange {
                table: "resume_length_options",
                index: 3,
                len: 3,
            }
        );
    }

    #[test]
    fn test_proficiency_bounds() {
        assert_eq!(proficiency_text(0), "Not Provided");
        assert_eq!(proficiency_text(6), "Can train others");
        // Out of range falls back to the default instead of failing.
        assert_eq!(proficiency_text(7), "Not Provided");
        assert_eq!(proficiency_text(255), "Not Provided");
    }

    #[test]
    fn test_technical_and_work_rendering() {
        let record = full_record();
        let text = render_technical_and_work(
            record.technical_skills.as_ref(),
            record.work_experience.as_ref(),
        );
        assert!(text.contains("My skill in B.I. is: Not studied\n"));
        assert!(text.contains("and my skill in sql is: Can train others."));
        assert!(text.contains("and my skill in excel is: Not Provided\n"));
        assert!(text.contains(
            "My work experience in Canada not related to data analytics: 2 years\n"
        ));
        assert!(text.contains("and first job date in data analytics in Canada: 1/10/2022\n"));
        assert!(text.contains("and I have: 2 interview offers."));
    }

    #[test]
    fn test_absent_sections_render_defaults() {
        let text = render_technical_and_work(None, None);
        assert!(text.contains("My skill in B.I. is: Not Provided\n"));
        assert!(text.contains("data analytics Work experience abroad: Not provided years\n"));
        assert!(text.contains("and I have: Not provided interview offers."));
    }

    #[test]
    fn test_synthesize_prompt_is_deterministic() {
        let record = full_record();
        let first = synthesize_prompt(&record).unwrap();
        let second = synthesize_prompt(&record).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_synthesize_prompt_wraps_instruction_template() {
        let prompt = synthesize_prompt(&full_record()).unwrap();
        assert!(prompt.starts_with("Based on the following data: Age: 25; Gender: F;"));
        assert!(prompt.contains("\"Probability3Months\": \"value\""));
        assert!(prompt.contains("{\"skill\": \"Networking\", \"level\": \"value\"}"));
        assert!(prompt.ends_with("}."));
        // Renderer outputs are space-joined in fixed order.
        assert!(prompt.contains("Informational Interviews. My networking skills:"));
        assert!(prompt.contains("Soft skills Technical skills Responses:"));
    }

    #[test]
    fn test_missing_required_section_is_an_error() {
        let mut record = full_record();
        record.networking = None;
        assert_eq!(
            synthesize_prompt(&record).unwrap_err(),
            SynthesisError::MissingSection("networking")
        );
    }
}
