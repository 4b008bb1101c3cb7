//! Axum route handlers for the content generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::engine::ContentSource;
use crate::history::queries::{record_doubt, save_study_plan};
use crate::models::doubt::DoubtSolution;
use crate::models::study::{StudyPlanTask, UserGoalProfile};
use crate::models::summary::{SummaryLength, SummaryOptions, TextSummary};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StudyPlanRequest {
    /// When present, the plan is stored as the user's current plan.
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub profile: UserGoalProfile,
}

#[derive(Debug, Serialize)]
pub struct StudyPlanResponse {
    pub tasks: Vec<StudyPlanTask>,
    pub source: ContentSource,
}

#[derive(Debug, Deserialize)]
pub struct DoubtRequest {
    /// When present, the answered doubt is recorded for the user.
    pub user_id: Option<Uuid>,
    pub question: String,
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct DoubtResponse {
    pub doubt_id: Option<Uuid>,
    pub solution: DoubtSolution,
    pub source: ContentSource,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub length: SummaryLength,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: TextSummary,
    pub source: ContentSource,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/study-plan
pub async fn handle_generate_study_plan(
    State(state): State<AppState>,
    Json(request): Json<StudyPlanRequest>,
) -> Result<Json<StudyPlanResponse>, AppError> {
    let generated = state.engine.generate_study_plan(&request.profile).await;

    if let Some(user_id) = request.user_id {
        save_study_plan(&state.db, user_id, &generated.content).await?;
    }

    Ok(Json(StudyPlanResponse {
        tasks: generated.content,
        source: generated.source,
    }))
}

/// POST /api/v1/ai/doubts
pub async fn handle_solve_doubt(
    State(state): State<AppState>,
    Json(request): Json<DoubtRequest>,
) -> Result<Json<DoubtResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let generated = state
        .engine
        .generate_doubt_solution(&request.question, &request.context)
        .await;
    info!(
        "Solved doubt: subject={}, difficulty={}, source={:?}",
        generated.content.subject, generated.content.difficulty, generated.source
    );

    let doubt_id = match request.user_id {
        Some(user_id) => Some(
            record_doubt(
                &state.db,
                user_id,
                &request.question,
                &request.context,
                &generated.content,
            )
            .await?,
        ),
        None => None,
    };

    Ok(Json(DoubtResponse {
        doubt_id,
        solution: generated.content,
        source: generated.source,
    }))
}

/// POST /api/v1/ai/summarize
pub async fn handle_summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let generated = state
        .engine
        .summarize_text(
            &request.text,
            SummaryOptions {
                length: request.length,
            },
        )
        .await;

    Ok(Json(SummarizeResponse {
        summary: generated.content,
        source: generated.source,
    }))
}
