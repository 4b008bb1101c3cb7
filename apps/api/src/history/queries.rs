use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::models::doubt::DoubtSolution;
use crate::models::history::{DoubtRow, StudyPlanRow};
use crate::models::study::StudyPlanTask;

/// Status written for every doubt answered by the engine.
pub const DOUBT_STATUS_SOLVED: &str = "solved";

#[derive(Debug, Clone, Serialize)]
pub struct SavedStudyPlan {
    pub user_id: Uuid,
    pub tasks: Vec<StudyPlanTask>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoubtRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question: String,
    pub context: String,
    pub solution: DoubtSolution,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DoubtRow> for DoubtRecord {
    type Error = anyhow::Error;

    fn try_from(row: DoubtRow) -> Result<Self> {
        Ok(DoubtRecord {
            id: Uuid::parse_str(&row.id).context("Malformed doubt id")?,
            user_id: Uuid::parse_str(&row.user_id).context("Malformed doubt user_id")?,
            solution: serde_json::from_str(&row.solution).with_context(|| {
                format!("Stored solution for doubt {} is not valid JSON", row.id)
            })?,
            question: row.question,
            context: row.context,
            status: row.status,
            created_at: row.created_at,
        })
    }
}

/// Stores `tasks` as the user's current plan, replacing any previous one.
pub async fn save_study_plan(
    pool: &SqlitePool,
    user_id: Uuid,
    tasks: &[StudyPlanTask],
) -> Result<SavedStudyPlan> {
    let tasks_json = serde_json::to_string(tasks).context("Failed to serialize study plan")?;
    let updated_at = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO study_plans (user_id, tasks, updated_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id) DO UPDATE SET tasks = excluded.tasks, updated_at = excluded.updated_at
        "#,
    )
    .bind(user_id.to_string())
    .bind(&tasks_json)
    .bind(updated_at)
    .execute(pool)
    .await?;

    info!("Saved study plan with {} tasks for user {user_id}", tasks.len());

    Ok(SavedStudyPlan {
        user_id,
        tasks: tasks.to_vec(),
        updated_at,
    })
}

pub async fn get_study_plan(pool: &SqlitePool, user_id: Uuid) -> Result<Option<SavedStudyPlan>> {
    let row = sqlx::query_as::<_, StudyPlanRow>(
        "SELECT user_id, tasks, updated_at FROM study_plans WHERE user_id = $1",
    )
    .bind(user_id.to_string())
    .fetch_optional(pool)
    .await?;

    row.map(|row| -> Result<SavedStudyPlan> {
        let tasks = serde_json::from_str(&row.tasks).with_context(|| {
            format!("Stored study plan for user {} is not valid JSON", row.user_id)
        })?;
        Ok(SavedStudyPlan {
            user_id,
            tasks,
            updated_at: row.updated_at,
        })
    })
    .transpose()
}

/// Records an answered doubt and returns its id.
pub async fn record_doubt(
    pool: &SqlitePool,
    user_id: Uuid,
    question: &str,
    context: &str,
    solution: &DoubtSolution,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let solution_json = serde_json::to_string(solution).context("Failed to serialize solution")?;

    sqlx::query(
        r#"
        INSERT INTO doubts (id, user_id, question, context, solution, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id.to_string())
    .bind(user_id.to_string())
    .bind(question)
    .bind(context)
    .bind(&solution_json)
    .bind(DOUBT_STATUS_SOLVED)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    info!("Recorded doubt {id} ({}) for user {user_id}", solution.subject);
    Ok(id)
}

/// All doubts for a user, newest first.
pub async fn list_doubts(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<DoubtRecord>> {
    let rows = sqlx::query_as::<_, DoubtRow>(
        r#"
        SELECT id, user_id, question, context, solution, status, created_at
        FROM doubts
        WHERE user_id = $1
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(user_id.to_string())
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(DoubtRecord::try_from).collect()
}

pub async fn get_doubt(pool: &SqlitePool, id: Uuid) -> Result<Option<DoubtRecord>> {
    let row = sqlx::query_as::<_, DoubtRow>(
        r#"
        SELECT id, user_id, question, context, solution, status, created_at
        FROM doubts
        WHERE id = $1
        "#,
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    row.map(DoubtRecord::try_from).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::generation::doubt_solver::assemble_doubt_solution;
    use crate::generation::study_plan::assemble_study_plan;
    use crate::models::doubt::Subject;
    use crate::models::study::UserGoalProfile;

    #[tokio::test]
    async fn test_study_plan_round_trip_through_storage() {
        let pool = test_pool().await;
        let user_id = Uuid::new_v4();
        let tasks = assemble_study_plan(&UserGoalProfile {
            current_study_hours: Some(1.0),
            expected_study_hours: Some(2.0),
            ..Default::default()
        });

        save_study_plan(&pool, user_id, &tasks).await.unwrap();
        let saved = get_study_plan(&pool, user_id).await.unwrap().unwrap();

        assert_eq!(saved.user_id, user_id);
        assert_eq!(saved.tasks, tasks);
        assert!(saved.tasks.iter().all(|t| !t.completed));
    }

    #[tokio::test]
    async fn test_saving_again_replaces_plan() {
        let pool = test_pool().await;
        let user_id = Uuid::new_v4();

        let long_plan = assemble_study_plan(&UserGoalProfile {
            current_self_rating: Some(1),
            expected_self_rating: Some(9),
            ..Default::default()
        });
        save_study_plan(&pool, user_id, &long_plan).await.unwrap();

        let base_plan = assemble_study_plan(&UserGoalProfile::default());
        save_study_plan(&pool, user_id, &base_plan).await.unwrap();

        let saved = get_study_plan(&pool, user_id).await.unwrap().unwrap();
        assert_eq!(saved.tasks.len(), 5);
    }

    #[tokio::test]
    async fn test_missing_study_plan_is_none() {
        let pool = test_pool().await;
        assert!(get_study_plan(&pool, Uuid::new_v4())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_record_and_list_doubts() {
        let pool = test_pool().await;
        let user_id = Uuid::new_v4();
        let other_user = Uuid::new_v4();

        let first_q = "What is a matrix?";
        let second_q = "Describe photosynthesis";
        let first = record_doubt(&pool, user_id, first_q, "", &assemble_doubt_solution(first_q, ""))
            .await
            .unwrap();
        let second = record_doubt(
            &pool,
            user_id,
            second_q,
            "Biology homework",
            &assemble_doubt_solution(second_q, "Biology homework"),
        )
        .await
        .unwrap();
        record_doubt(&pool, other_user, first_q, "", &assemble_doubt_solution(first_q, ""))
            .await
            .unwrap();

        let doubts = list_doubts(&pool, user_id).await.unwrap();
        assert_eq!(doubts.len(), 2);
        assert_eq!(doubts[0].id, second);
        assert_eq!(doubts[1].id, first);
        assert_eq!(doubts[0].solution.subject, Subject::Biology);
        assert_eq!(doubts[0].context, "Biology homework");
        assert!(doubts.iter().all(|d| d.status == DOUBT_STATUS_SOLVED));

        let fetched = get_doubt(&pool, first).await.unwrap().unwrap();
        assert_eq!(fetched.question, first_q);
        assert_eq!(fetched.solution.subject, Subject::Mathematics);

        assert!(get_doubt(&pool, Uuid::new_v4()).await.unwrap().is_none());
    }
}
