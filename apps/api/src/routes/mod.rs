pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisory::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/ai/answer-question",
            post(handlers::handle_answer_question),
        )
        .route(
            "/api/v1/ai/find-scholarships",
            post(handlers::handle_find_scholarships),
        )
        .route(
            "/api/v1/ai/generate-roadmap",
            post(handlers::handle_generate_roadmap),
        )
        .with_state(state)
}
