//! Persistence Gateway — the read/write contract this service depends on.
//!
//! The schema itself is owned by the student-management service; nothing here
//! creates tables or invents identities. Reads cover students, users, and
//! universities; writes cover generated roadmaps and the interaction log.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ai_log::AiLogRow;
use crate::models::roadmap::RoadmapRow;
use crate::models::student::StudentRow;
use crate::models::university::UniversityRow;
use crate::models::user::UserRow;

pub async fn find_student_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<StudentRow>, sqlx::Error> {
    sqlx::query_as::<_, StudentRow>("SELECT * FROM students WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Resolves a set of university ids. Ids with no matching row are silently
/// dropped; callers treat an empty result as not-found.
pub async fn find_universities_by_ids(
    pool: &PgPool,
    ids: &[Uuid],
) -> Result<Vec<UniversityRow>, sqlx::Error> {
    sqlx::query_as::<_, UniversityRow>("SELECT * FROM universities WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await
}

/// Inserts a new roadmap row and returns it. One row per successful
/// generation; roadmaps are never updated through this gateway.
pub async fn create_roadmap(
    pool: &PgPool,
    user_id: Uuid,
    student_id: Uuid,
    title: &str,
    content: &str,
) -> Result<RoadmapRow, sqlx::Error> {
    sqlx::query_as::<_, RoadmapRow>(
        r#"
        INSERT INTO roadmaps (id, user_id, student_id, title, content)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(student_id)
    .bind(title)
    .bind(content)
    .fetch_one(pool)
    .await
}

/// Appends one interaction log entry.
pub async fn create_interaction_log(
    pool: &PgPool,
    user_id: Uuid,
    question: &str,
    answer: &str,
    sources: &[String],
) -> Result<AiLogRow, sqlx::Error> {
    sqlx::query_as::<_, AiLogRow>(
        r#"
        INSERT INTO ai_logs (id, user_id, question, answer, sources)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(question)
    .bind(answer)
    .bind(sources)
    .fetch_one(pool)
    .await
}
