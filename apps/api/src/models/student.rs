use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Student academic profile. Created and updated by the student-management
/// flow; this service only reads it to ground prompts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub grade: i32,
    pub country: String,
    /// Order-preserving for display; matching treats this as a set.
    pub interests: Vec<String>,
    /// 0.0–4.0 scale.
    pub gpa: Option<f64>,
    pub sat_score: Option<i32>,
    /// 0.0–9.0 in half-point increments.
    pub ielts_band: Option<f64>,
    pub created_at: DateTime<Utc>,
}
