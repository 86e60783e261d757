use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A generated admission roadmap. Created exactly once per successful
/// generation and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoadmapRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub student_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
