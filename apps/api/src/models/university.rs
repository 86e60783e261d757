use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// University admission profile, sourced externally. `sat_range_min` ≤
/// `sat_range_max` where both are present.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UniversityRow {
    pub id: Uuid,
    pub name: String,
    pub sat_range_min: Option<i32>,
    pub sat_range_max: Option<i32>,
    pub gpa_requirement: Option<f64>,
    pub acceptance_rate: Option<f64>,
    pub created_at: DateTime<Utc>,
}
