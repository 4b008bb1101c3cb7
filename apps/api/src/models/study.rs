use serde::{Deserialize, Serialize};

/// Coarse learner category. Unknown categories deserialize to `Other`
/// and match no category-specific plan rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentCategory {
    School,
    College,
    Professional,
    Researcher,
    #[serde(other)]
    Other,
}

/// Goal profile supplied by the caller. Every field is optional; a missing
/// numeric field makes any rule that depends on it evaluate false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGoalProfile {
    pub category: Option<StudentCategory>,
    pub domain: Option<String>,
    pub branch: Option<String>,
    pub current_gpa: Option<f64>,
    pub expected_gpa: Option<f64>,
    pub current_study_hours: Option<f64>,
    pub expected_study_hours: Option<f64>,
    pub current_self_rating: Option<i32>,
    pub expected_self_rating: Option<i32>,
}

impl UserGoalProfile {
    /// The subject area the plan is built around: `domain`, then `branch`,
    /// then "General Studies". Blank strings are skipped.
    pub fn focus_area(&self) -> &str {
        [self.domain.as_deref(), self.branch.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or("General Studies")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// One entry of a generated study plan. Created fresh on every generation;
/// completion is tracked by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlanTask {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free text, e.g. "30 minutes".
    pub duration: String,
    pub priority: TaskPriority,
    pub category: String,
    #[serde(default)]
    pub completed: bool,
}
