//! Axum route handlers for the advisory endpoints.
//!
//! Each handler follows the same shape: validate the body (400, before any
//! downstream call), resolve referenced records (404 when absent), invoke
//! the advisory service, persist results, append a best-effort interaction
//! log entry, and respond with the structured result plus a timestamp.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::advisory::assistant::{
    answer_question, find_scholarships, generate_roadmap, StudentProfile,
};
use crate::advisory::extract::{Scholarship, TimelinePhase};
use crate::errors::AppError;
use crate::state::AppState;
use crate::store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

// Required fields are `Option` so an absent field produces the documented
// 400 response instead of a body-rejection from the extractor.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub student_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerQuestionResponse {
    pub answer: String,
    pub sources: Vec<String>,
    pub model: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindScholarshipsRequest {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub student_id: Option<Uuid>,
    #[serde(default)]
    pub target_countries: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindScholarshipsResponse {
    pub scholarships: Vec<Scholarship>,
    pub recommendations: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapRequest {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub student_id: Option<Uuid>,
    #[serde(default)]
    pub target_university_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapResponse {
    pub id: Uuid,
    pub roadmap: String,
    pub timeline: Vec<TimelinePhase>,
    pub model: String,
    pub timestamp: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/answer-question
///
/// Answers an admissions question. `studentId` is optional context; an
/// unknown id simply means the question is answered without a profile.
pub async fn handle_answer_question(
    State(state): State<AppState>,
    Json(request): Json<AnswerQuestionRequest>,
) -> Result<Json<AnswerQuestionResponse>, AppError> {
    let question = request.question.filter(|q| !q.trim().is_empty());
    let (question, user_id) = match (question, request.user_id) {
        (Some(q), Some(u)) => (q, u),
        (q, u) => {
            let mut missing = Vec::new();
            if q.is_none() {
                missing.push("question");
            }
            if u.is_none() {
                missing.push("userId");
            }
            return Err(missing_fields(&missing));
        }
    };

    let context = match request.student_id {
        Some(student_id) => store::find_student_by_id(&state.db, student_id)
            .await?
            .map(|row| StudentProfile::from(&row)),
        None => None,
    };

    let result = answer_question(&state.llm, &question, context.as_ref()).await?;

    record_interaction(&state.db, user_id, &question, &result.answer, &result.sources).await;

    Ok(Json(AnswerQuestionResponse {
        answer: result.answer,
        sources: result.sources,
        model: result.model.to_string(),
        timestamp: Utc::now(),
    }))
}

/// POST /api/v1/ai/find-scholarships
///
/// Finds scholarships for a student. The student must exist; the lookup
/// happens before any provider call is made.
pub async fn handle_find_scholarships(
    State(state): State<AppState>,
    Json(request): Json<FindScholarshipsRequest>,
) -> Result<Json<FindScholarshipsResponse>, AppError> {
    let (user_id, student_id) = match (request.user_id, request.student_id) {
        (Some(u), Some(s)) => (u, s),
        (u, s) => {
            let mut missing = Vec::new();
            if u.is_none() {
                missing.push("userId");
            }
            if s.is_none() {
                missing.push("studentId");
            }
            return Err(missing_fields(&missing));
        }
    };

    let student = store::find_student_by_id(&state.db, student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;
    let profile = StudentProfile::from(&student);

    let result = find_scholarships(
        &state.llm,
        state.scholarship_extractor.as_ref(),
        &profile,
        request.target_countries.as_deref(),
    )
    .await?;

    let logged_answer = serde_json::to_string(&result.scholarships).unwrap_or_default();
    record_interaction(
        &state.db,
        user_id,
        &format!("Find scholarships for student from {}", student.country),
        &logged_answer,
        &[],
    )
    .await;

    Ok(Json(FindScholarshipsResponse {
        scholarships: result.scholarships,
        recommendations: result.recommendations,
        timestamp: Utc::now(),
    }))
}

/// POST /api/v1/ai/generate-roadmap
///
/// Generates and persists an admission roadmap. Both the student and at
/// least one target university must resolve before the provider is called;
/// exactly one roadmap row is written per successful generation.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<GenerateRoadmapRequest>,
) -> Result<Json<GenerateRoadmapResponse>, AppError> {
    let (user_id, student_id, target_university_ids) = match (
        request.user_id,
        request.student_id,
        request.target_university_ids,
    ) {
        (Some(u), Some(s), Some(t)) => (u, s, t),
        (u, s, t) => {
            let mut missing = Vec::new();
            if u.is_none() {
                missing.push("userId");
            }
            if s.is_none() {
                missing.push("studentId");
            }
            if t.is_none() {
                missing.push("targetUniversityIds");
            }
            return Err(missing_fields(&missing));
        }
    };

    let student = store::find_student_by_id(&state.db, student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    let universities = store::find_universities_by_ids(&state.db, &target_university_ids).await?;
    if universities.is_empty() {
        return Err(AppError::NotFound("No universities found".to_string()));
    }

    // The roadmap title carries the owner's name; a student row without its
    // user is an inconsistency in the store, not a caller error.
    let owner = store::find_user_by_id(&state.db, student.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "Student {} references missing user {}",
                student.id,
                student.user_id
            ))
        })?;

    let profile = StudentProfile::from(&student);
    let result = generate_roadmap(&state.llm, &profile, &universities).await?;

    let roadmap = store::create_roadmap(
        &state.db,
        user_id,
        student_id,
        &format!("{}'s College Roadmap", owner.name),
        &result.roadmap,
    )
    .await?;

    let university_names = universities
        .iter()
        .map(|u| u.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    record_interaction(
        &state.db,
        user_id,
        &format!("Generate roadmap for {university_names}"),
        &result.roadmap,
        &[],
    )
    .await;

    Ok(Json(GenerateRoadmapResponse {
        id: roadmap.id,
        roadmap: result.roadmap,
        timeline: result.timeline,
        model: result.model.to_string(),
        timestamp: Utc::now(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn missing_fields(missing: &[&str]) -> AppError {
    AppError::Validation(format!("Missing required fields: {}", missing.join(", ")))
}

/// Appends an interaction log entry. Best-effort: a failed write is logged
/// internally and never alters the response.
async fn record_interaction(
    pool: &PgPool,
    user_id: Uuid,
    question: &str,
    answer: &str,
    sources: &[String],
) {
    if let Err(e) = store::create_interaction_log(pool, user_id, question, answer, sources).await {
        warn!("Failed to log AI interaction for user {user_id}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_missing_fields_message_lists_wire_names() {
        let err = missing_fields(&["question", "userId"]);
        assert!(matches!(err, AppError::Validation(ref msg)
            if msg == "Missing required fields: question, userId"));
    }

    #[test]
    fn test_missing_fields_is_a_client_error() {
        let response = missing_fields(&["userId"]).into_response();
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_answer_question_request_accepts_camel_case_body() {
        let json = serde_json::json!({
            "question": "What SAT score do I need for Stanford?",
            "userId": Uuid::new_v4(),
        });
        let request: AnswerQuestionRequest = serde_json::from_value(json).unwrap();
        assert!(request.question.is_some());
        assert!(request.user_id.is_some());
        assert!(request.student_id.is_none());
    }

    #[test]
    fn test_answer_question_request_tolerates_missing_fields() {
        let request: AnswerQuestionRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(request.question.is_none());
        assert!(request.user_id.is_none());
    }

    #[test]
    fn test_generate_roadmap_request_parses_university_id_list() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let json = serde_json::json!({
            "userId": Uuid::new_v4(),
            "studentId": Uuid::new_v4(),
            "targetUniversityIds": ids.clone(),
        });
        let request: GenerateRoadmapRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.target_university_ids.unwrap(), ids);
    }

    #[test]
    fn test_find_scholarships_request_target_countries_optional() {
        let json = serde_json::json!({
            "userId": Uuid::new_v4(),
            "studentId": Uuid::new_v4(),
        });
        let request: FindScholarshipsRequest = serde_json::from_value(json).unwrap();
        assert!(request.target_countries.is_none());
    }

    #[test]
    fn test_responses_serialize_with_camel_case_keys() {
        let response = GenerateRoadmapResponse {
            id: Uuid::new_v4(),
            roadmap: "Year 1: prepare.".to_string(),
            timeline: crate::advisory::extract::default_timeline(),
            model: "gpt-4".to_string(),
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("roadmap").is_some());
        assert!(value["timeline"][0].get("startDate").is_some());
        assert!(value.get("timestamp").is_some());
    }
}
