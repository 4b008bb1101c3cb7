//! Study plan assembler — a fixed base routine plus goal-gap driven extras.
//!
//! Rules, evaluated in order after the five base tasks:
//! - expected study hours > current        → Extended Study Session
//! - expected GPA > current GPA + 0.5      → Performance Improvement Focus
//! - expected self-rating > current + 2    → Confidence Building Exercises
//! - category professional / researcher    → Industry Application Study / Research Paper Review
//!
//! Missing profile numbers make the dependent rule evaluate false.

use crate::models::study::{StudentCategory, StudyPlanTask, TaskPriority, UserGoalProfile};

/// Required GPA gap before a performance task is added.
pub const GPA_IMPROVEMENT_MARGIN: f64 = 0.5;
/// Required self-rating gap before a confidence task is added.
pub const SELF_RATING_MARGIN: i32 = 2;

struct TaskDraft {
    title: String,
    description: String,
    duration: String,
    priority: TaskPriority,
    category: &'static str,
}

impl TaskDraft {
    fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        duration: impl Into<String>,
        priority: TaskPriority,
        category: &'static str,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration: duration.into(),
            priority,
            category,
        }
    }
}

/// Builds the study plan for a profile. Deterministic: identical profiles
/// give identical plans. Ids are "1", "2", … in emission order.
pub fn assemble_study_plan(profile: &UserGoalProfile) -> Vec<StudyPlanTask> {
    let focus = profile.focus_area();

    let mut drafts = vec![
        TaskDraft::new(
            "Morning Review",
            "Review yesterday's notes and key concepts",
            "30 minutes",
            TaskPriority::High,
            "Review",
        ),
        TaskDraft::new(
            format!("Core {focus} Study"),
            format!("Deep study session on core {focus} topics"),
            "2 hours",
            TaskPriority::High,
            "Study",
        ),
        TaskDraft::new(
            "Practice Problems",
            "Solve practice problems to apply what you learned",
            "1 hour",
            TaskPriority::Medium,
            "Practice",
        ),
        TaskDraft::new(
            "Flashcard Review",
            "Review flashcards using spaced repetition",
            "20 minutes",
            TaskPriority::Medium,
            "Review",
        ),
        TaskDraft::new(
            "Note Organization",
            "Organize and summarize today's study notes",
            "15 minutes",
            TaskPriority::Low,
            "Organization",
        ),
    ];

    if let Some(minutes) = extra_study_minutes(profile) {
        drafts.push(TaskDraft::new(
            "Extended Study Session",
            format!("Additional {minutes} minutes of focused study to reach your daily goal"),
            format!("{minutes} minutes"),
            TaskPriority::Medium,
            "Study",
        ));
    }

    if needs_performance_focus(profile) {
        drafts.push(TaskDraft::new(
            "Performance Improvement Focus",
            "Target weak areas identified from recent grades and assessments",
            "45 minutes",
            TaskPriority::High,
            "Improvement",
        ));
    }

    if needs_confidence_building(profile) {
        drafts.push(TaskDraft::new(
            "Confidence Building Exercises",
            "Attempt problems slightly above your comfort level and track your wins",
            "30 minutes",
            TaskPriority::Medium,
            "Confidence",
        ));
    }

    match profile.category {
        Some(StudentCategory::Professional) => drafts.push(TaskDraft::new(
            "Industry Application Study",
            format!("Study real-world applications of {focus} in your industry"),
            "45 minutes",
            TaskPriority::Medium,
            "Professional",
        )),
        Some(StudentCategory::Researcher) => drafts.push(TaskDraft::new(
            "Research Paper Review",
            format!("Read and annotate a recent research paper in {focus}"),
            "1 hour",
            TaskPriority::Medium,
            "Research",
        )),
        _ => {}
    }

    drafts
        .into_iter()
        .enumerate()
        .map(|(i, d)| StudyPlanTask {
            id: (i + 1).to_string(),
            title: d.title,
            description: d.description,
            duration: d.duration,
            priority: d.priority,
            category: d.category.to_string(),
            completed: false,
        })
        .collect()
}

/// Minutes of extra daily study needed, when the goal exceeds current hours.
fn extra_study_minutes(profile: &UserGoalProfile) -> Option<i64> {
    match (profile.current_study_hours, profile.expected_study_hours) {
        (Some(current), Some(expected)) if expected > current => {
            Some(((expected - current) * 60.0).round() as i64)
        }
        _ => None,
    }
}

fn needs_performance_focus(profile: &UserGoalProfile) -> bool {
    matches!(
        (profile.current_gpa, profile.expected_gpa),
        (Some(current), Some(expected)) if expected > current + GPA_IMPROVEMENT_MARGIN
    )
}

fn needs_confidence_building(profile: &UserGoalProfile) -> bool {
    matches!(
        (profile.current_self_rating, profile.expected_self_rating),
        (Some(current), Some(expected)) if expected.saturating_sub(current) > SELF_RATING_MARGIN
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(plan: &[StudyPlanTask]) -> Vec<&str> {
        plan.iter().map(|t| t.title.as_str()).collect()
    }

    fn steady_profile() -> UserGoalProfile {
        UserGoalProfile {
            category: Some(StudentCategory::College),
            domain: Some("Chemistry".to_string()),
            branch: None,
            current_gpa: Some(8.0),
            expected_gpa: Some(8.5),
            current_study_hours: Some(5.0),
            expected_study_hours: Some(5.0),
            current_self_rating: Some(6),
            expected_self_rating: Some(8),
        }
    }

    #[test]
    fn test_no_gaps_gives_exactly_base_tasks() {
        let plan = assemble_study_plan(&steady_profile());
        assert_eq!(
            titles(&plan),
            vec![
                "Morning Review",
                "Core Chemistry Study",
                "Practice Problems",
                "Flashcard Review",
                "Note Organization",
            ]
        );
        let ids: Vec<&str> = plan.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert!(plan.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_empty_profile_degrades_to_base_tasks() {
        let plan = assemble_study_plan(&UserGoalProfile::default());
        assert_eq!(plan.len(), 5);
        assert_eq!(plan[1].title, "Core General Studies Study");
    }

    #[test]
    fn test_physics_student_scenario() {
        let profile: UserGoalProfile = serde_json::from_value(serde_json::json!({
            "category": "student",
            "domain": "Physics",
            "currentStudyHours": 4,
            "expectedStudyHours": 6,
            "currentGpa": 7.0,
            "expectedGpa": 7.2,
            "currentSelfRating": 6,
            "expectedSelfRating": 7
        }))
        .unwrap();

        let plan = assemble_study_plan(&profile);
        assert_eq!(plan.len(), 6);
        let extended = &plan[5];
        assert_eq!(extended.id, "6");
        assert_eq!(extended.title, "Extended Study Session");
        assert_eq!(extended.duration, "120 minutes");
        assert!(extended.description.contains("120 minutes"));
    }

    #[test]
    fn test_extended_session_rounds_minutes() {
        let profile = UserGoalProfile {
            current_study_hours: Some(2.0),
            expected_study_hours: Some(3.33),
            ..Default::default()
        };
        let plan = assemble_study_plan(&profile);
        let extended: Vec<_> = plan
            .iter()
            .filter(|t| t.title == "Extended Study Session")
            .collect();
        assert_eq!(extended.len(), 1);
        // 1.33 h * 60 = 79.8 → 80
        assert_eq!(extended[0].duration, "80 minutes");
    }

    #[test]
    fn test_gpa_margin_is_exclusive() {
        let mut profile = UserGoalProfile {
            current_gpa: Some(3.0),
            expected_gpa: Some(3.5),
            ..Default::default()
        };
        assert!(!titles(&assemble_study_plan(&profile)).contains(&"Performance Improvement Focus"));

        profile.expected_gpa = Some(3.6);
        assert!(titles(&assemble_study_plan(&profile)).contains(&"Performance Improvement Focus"));
    }

    #[test]
    fn test_self_rating_margin() {
        let mut profile = UserGoalProfile {
            current_self_rating: Some(5),
            expected_self_rating: Some(7),
            ..Default::default()
        };
        assert_eq!(assemble_study_plan(&profile).len(), 5);

        profile.expected_self_rating = Some(8);
        let plan = assemble_study_plan(&profile);
        assert_eq!(plan.last().unwrap().title, "Confidence Building Exercises");
    }

    #[test]
    fn test_extreme_self_ratings_do_not_overflow() {
        let profile: UserGoalProfile = serde_json::from_str(
            r#"{"currentSelfRating": 2147483647, "expectedSelfRating": 5}"#,
        )
        .unwrap();
        assert_eq!(assemble_study_plan(&profile).len(), 5);

        let profile = UserGoalProfile {
            current_self_rating: Some(i32::MIN),
            expected_self_rating: Some(i32::MAX),
            ..Default::default()
        };
        let plan = assemble_study_plan(&profile);
        assert_eq!(plan.last().unwrap().title, "Confidence Building Exercises");
    }

    #[test]
    fn test_category_specific_tasks() {
        let professional = UserGoalProfile {
            category: Some(StudentCategory::Professional),
            ..Default::default()
        };
        let plan = assemble_study_plan(&professional);
        assert_eq!(plan.last().unwrap().title, "Industry Application Study");

        let researcher = UserGoalProfile {
            category: Some(StudentCategory::Researcher),
            branch: Some("Neuroscience".to_string()),
            ..Default::default()
        };
        let plan = assemble_study_plan(&researcher);
        assert_eq!(plan.last().unwrap().title, "Research Paper Review");
        assert!(plan.last().unwrap().description.contains("Neuroscience"));
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let profile = UserGoalProfile {
            category: Some(StudentCategory::Researcher),
            domain: None,
            branch: None,
            current_gpa: Some(6.0),
            expected_gpa: Some(8.0),
            current_study_hours: Some(1.0),
            expected_study_hours: Some(2.5),
            current_self_rating: Some(3),
            expected_self_rating: Some(9),
        };
        let plan = assemble_study_plan(&profile);
        assert_eq!(
            titles(&plan)[5..].to_vec(),
            vec![
                "Extended Study Session",
                "Performance Improvement Focus",
                "Confidence Building Exercises",
                "Research Paper Review",
            ]
        );
        assert_eq!(plan.last().unwrap().id, "9");
    }

    #[test]
    fn test_plan_is_deterministic() {
        let profile = steady_profile();
        let a = serde_json::to_string(&assemble_study_plan(&profile)).unwrap();
        let b = serde_json::to_string(&assemble_study_plan(&profile)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_plan_json_round_trip_preserves_order_and_defaults() {
        let plan = assemble_study_plan(&steady_profile());
        let json = serde_json::to_string(&plan).unwrap();
        let recovered: Vec<StudyPlanTask> = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, plan);
        assert!(recovered.iter().all(|t| !t.completed));
    }
}
