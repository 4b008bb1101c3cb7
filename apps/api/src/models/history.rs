use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Latest plan per user. `tasks` holds the serialized `Vec<StudyPlanTask>`.
#[derive(Debug, Clone, FromRow)]
pub struct StudyPlanRow {
    pub user_id: String,
    pub tasks: String,
    pub updated_at: DateTime<Utc>,
}

/// A solved question. `solution` holds the serialized `DoubtSolution`.
#[derive(Debug, Clone, FromRow)]
pub struct DoubtRow {
    pub id: String,
    pub user_id: String,
    pub question: String,
    pub context: String,
    pub solution: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
