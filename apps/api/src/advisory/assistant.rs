//! Advisory Service — composes persona prompts with student context, invokes
//! the LLM client, and post-processes the raw text into structured results.
//!
//! Every operation has the same shape: compose messages, complete,
//! post-process. Provider failures are never caught or downgraded here; they
//! propagate to the handler layer as `AppError::Llm`.

use serde::Serialize;
use uuid::Uuid;

use crate::advisory::extract::{
    default_timeline, extract_sources, Scholarship, ScholarshipExtractor, TimelinePhase,
};
use crate::advisory::prompts::{Persona, ROADMAP_PROMPT_TEMPLATE, SCHOLARSHIP_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::{ChatMessage, LlmClient, FAST_MODEL, SMART_MODEL};
use crate::models::student::StudentRow;
use crate::models::university::UniversityRow;

/// Prompt-facing projection of a student record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub grade: i32,
    pub country: String,
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ielts_band: Option<f64>,
}

impl From<&StudentRow> for StudentProfile {
    fn from(row: &StudentRow) -> Self {
        Self {
            id: Some(row.id),
            grade: row.grade,
            country: row.country.clone(),
            interests: row.interests.clone(),
            gpa: row.gpa,
            sat_score: row.sat_score,
            ielts_band: row.ielts_band,
        }
    }
}

#[derive(Debug)]
pub struct Answer {
    pub answer: String,
    pub sources: Vec<String>,
    pub model: &'static str,
}

#[derive(Debug)]
pub struct GeneratedRoadmap {
    pub roadmap: String,
    pub timeline: Vec<TimelinePhase>,
    pub model: &'static str,
}

#[derive(Debug)]
pub struct ScholarshipSearch {
    pub scholarships: Vec<Scholarship>,
    pub recommendations: String,
}

/// Answers an admissions question, optionally grounded in a student profile.
/// Fast tier; cited URLs are extracted from the answer text.
pub async fn answer_question(
    llm: &LlmClient,
    question: &str,
    context: Option<&StudentProfile>,
) -> Result<Answer, AppError> {
    let system = Persona::AdmissionsAdvisor.system_prompt();

    // With context, the user message repeats the advisor instructions and
    // carries a serialized profile block; without, the raw question passes
    // through untouched.
    let user_message = match context {
        Some(profile) => {
            let profile_json = serde_json::to_string(profile).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to serialize student context: {e}"))
            })?;
            format!("{system}\n\nStudent context:\n{profile_json}\n\nQuestion: {question}")
        }
        None => question.to_string(),
    };

    let messages = [ChatMessage::system(system), ChatMessage::user(&user_message)];

    let answer = llm
        .complete(FAST_MODEL, &messages, 0.7, 1500)
        .await
        .map_err(|e| AppError::Llm(format!("Question answering failed: {e}")))?;

    let sources = extract_sources(&answer);

    Ok(Answer {
        answer,
        sources,
        model: FAST_MODEL,
    })
}

/// Generates a personalized admission roadmap for the given target
/// universities. Smart tier. The returned timeline is the fixed three-phase
/// summary; the roadmap text itself is the authoritative plan.
pub async fn generate_roadmap(
    llm: &LlmClient,
    student: &StudentProfile,
    universities: &[UniversityRow],
) -> Result<GeneratedRoadmap, AppError> {
    let prompt = build_roadmap_prompt(student, universities);
    let messages = [
        ChatMessage::system(Persona::RoadmapBuilder.system_prompt()),
        ChatMessage::user(&prompt),
    ];

    let roadmap = llm
        .complete(SMART_MODEL, &messages, 0.7, 3000)
        .await
        .map_err(|e| AppError::Llm(format!("Roadmap generation failed: {e}")))?;

    Ok(GeneratedRoadmap {
        roadmap,
        timeline: default_timeline(),
        model: SMART_MODEL,
    })
}

/// Searches for scholarships matching the student's profile. Smart tier.
/// The raw recommendation text is returned verbatim alongside whatever
/// structured records the extractor recovers from it.
pub async fn find_scholarships(
    llm: &LlmClient,
    extractor: &dyn ScholarshipExtractor,
    student: &StudentProfile,
    target_countries: Option<&[String]>,
) -> Result<ScholarshipSearch, AppError> {
    let prompt = build_scholarship_prompt(student, target_countries);
    let messages = [
        ChatMessage::system(Persona::ScholarshipAdvisor.system_prompt()),
        ChatMessage::user(&prompt),
    ];

    let recommendations = llm
        .complete(SMART_MODEL, &messages, 0.7, 2500)
        .await
        .map_err(|e| AppError::Llm(format!("Scholarship search failed: {e}")))?;

    let scholarships = extractor.extract(&recommendations);

    Ok(ScholarshipSearch {
        scholarships,
        recommendations,
    })
}

fn build_roadmap_prompt(student: &StudentProfile, universities: &[UniversityRow]) -> String {
    let universities_list = universities
        .iter()
        .map(|u| {
            format!(
                "- {} (SAT: {}-{}, Acceptance: {}%)",
                u.name,
                fmt_opt(u.sat_range_min),
                fmt_opt(u.sat_range_max),
                fmt_opt(u.acceptance_rate),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    ROADMAP_PROMPT_TEMPLATE
        .replace("{grade}", &student.grade.to_string())
        .replace("{country}", &student.country)
        .replace("{interests}", &student.interests.join(", "))
        .replace("{sat}", &fmt_opt(student.sat_score))
        .replace("{gpa}", &fmt_opt(student.gpa))
        .replace("{universities}", &universities_list)
}

fn build_scholarship_prompt(
    student: &StudentProfile,
    target_countries: Option<&[String]>,
) -> String {
    let target_countries_line = target_countries
        .filter(|countries| !countries.is_empty())
        .map(|countries| format!("- Target Countries for Study: {}\n", countries.join(", ")))
        .unwrap_or_default();

    SCHOLARSHIP_PROMPT_TEMPLATE
        .replace("{country}", &student.country)
        .replace("{grade}", &student.grade.to_string())
        .replace("{interests}", &student.interests.join(", "))
        .replace("{gpa}", &fmt_opt(student.gpa))
        .replace("{sat}", &fmt_opt(student.sat_score))
        .replace("{target_countries_line}", &target_countries_line)
}

/// Absent profile and university fields render as a literal placeholder.
fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "TBD".to_string(), |v| v.to_string())
}
