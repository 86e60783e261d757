use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only record of one advisory exchange, kept for monitoring.
/// Writes are best-effort: a failed insert never fails the primary request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AiLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question: String,
    pub answer: String,
    pub sources: Vec<String>,
    pub created_at: DateTime<Utc>,
}
