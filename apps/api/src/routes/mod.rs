pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::history::handlers as history;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content generation
        .route(
            "/api/v1/ai/study-plan",
            post(generation::handle_generate_study_plan),
        )
        .route("/api/v1/ai/doubts", post(generation::handle_solve_doubt))
        .route("/api/v1/ai/summarize", post(generation::handle_summarize))
        // Stored results
        .route("/api/v1/study-plan", get(history::handle_get_study_plan))
        .route("/api/v1/doubts", get(history::handle_list_doubts))
        .route("/api/v1/doubts/:id", get(history::handle_get_doubt))
        .with_state(state)
}
