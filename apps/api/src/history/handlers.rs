use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::queries::{
    get_doubt, get_study_plan, list_doubts, DoubtRecord, SavedStudyPlan,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/study-plan
pub async fn handle_get_study_plan(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SavedStudyPlan>, AppError> {
    let plan = get_study_plan(&state.db, params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No study plan for user {}", params.user_id))
        })?;
    Ok(Json(plan))
}

/// GET /api/v1/doubts
pub async fn handle_list_doubts(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<DoubtRecord>>, AppError> {
    Ok(Json(list_doubts(&state.db, params.user_id).await?))
}

/// GET /api/v1/doubts/:id
pub async fn handle_get_doubt(
    State(state): State<AppState>,
    Path(doubt_id): Path<Uuid>,
) -> Result<Json<DoubtRecord>, AppError> {
    let doubt = get_doubt(&state.db, doubt_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Doubt {doubt_id} not found")))?;
    Ok(Json(doubt))
}
