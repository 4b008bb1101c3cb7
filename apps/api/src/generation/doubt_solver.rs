//! Doubt solution assembler — classify, then fill a `DoubtSolution` from the
//! template bank.

use crate::generation::classifier::{classify, Classification};
use crate::generation::templates;
use crate::models::doubt::{DoubtSolution, Subject};

/// Builds a solution for `question`. `context` only affects the General
/// explanation. Never fails; empty input yields a General / intermediate answer.
pub fn assemble_doubt_solution(question: &str, context: &str) -> DoubtSolution {
    let Classification {
        subject,
        difficulty,
        question_type,
    } = classify(question);

    let (explanation, concepts) = match subject {
        Subject::General => (
            templates::general_explanation(question, context),
            templates::derive_concepts(question),
        ),
        _ => (
            templates::explanation(subject, question_type).to_string(),
            templates::concepts(subject, question_type),
        ),
    };

    DoubtSolution {
        explanation,
        steps: templates::steps(subject, question_type),
        concepts,
        examples: templates::examples(subject),
        tips: templates::study_tips(subject, difficulty).to_string(),
        related_topics: templates::related_topics(subject),
        difficulty,
        subject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::doubt::{Difficulty, QuestionType};

    #[test]
    fn test_cs_explanation_question() {
        let solution = assemble_doubt_solution("Explain how the sorting algorithm works", "");
        assert_eq!(solution.subject, Subject::ComputerScience);
        assert_eq!(solution.difficulty, Difficulty::Intermediate);
        assert_eq!(
            solution.explanation,
            templates::explanation(Subject::ComputerScience, QuestionType::Explanation)
        );
        assert_eq!(solution.steps.len(), 4);
        assert_eq!(solution.related_topics.len(), 5);
    }

    #[test]
    fn test_problem_solving_math_uses_five_steps() {
        let solution = assemble_doubt_solution("Solve this basic quadratic equation", "");
        assert_eq!(solution.subject, Subject::Mathematics);
        assert_eq!(solution.difficulty, Difficulty::Beginner);
        assert_eq!(solution.steps.len(), 5);
        assert_eq!(
            solution.concepts,
            templates::concepts(Subject::Mathematics, QuestionType::ProblemSolving)
        );
        assert_eq!(
            solution.tips,
            templates::study_tips(Subject::Mathematics, Difficulty::Beginner)
        );
    }

    #[test]
    fn test_general_question_derives_concepts_from_text() {
        let solution = assemble_doubt_solution("Explain how binary search works", "");
        assert_eq!(solution.subject, Subject::General);
        assert_eq!(solution.concepts, vec!["Binary", "Search", "Works"]);
        assert_eq!(solution.related_topics.len(), 3);
    }

    #[test]
    fn test_context_only_changes_general_explanation() {
        let plain = assemble_doubt_solution("Why do tides happen?", "");
        let with_context = assemble_doubt_solution("Why do tides happen?", "Near the coast");
        assert_ne!(plain.explanation, with_context.explanation);
        assert_eq!(plain.concepts, with_context.concepts);

        let math = assemble_doubt_solution("What is a matrix?", "");
        let math_ctx = assemble_doubt_solution("What is a matrix?", "Linear algebra class");
        assert_eq!(math.explanation, math_ctx.explanation);
    }

    #[test]
    fn test_empty_question_does_not_panic() {
        let solution = assemble_doubt_solution("", "");
        assert_eq!(solution.subject, Subject::General);
        assert_eq!(solution.difficulty, Difficulty::Intermediate);
        assert!(!solution.explanation.is_empty());
        assert!(solution.concepts.is_empty());
    }

    #[test]
    fn test_uncovered_tip_pair_falls_back() {
        let solution =
            assemble_doubt_solution("A comprehensive look at quantum tunnelling", "");
        assert_eq!(solution.subject, Subject::Physics);
        assert_eq!(solution.difficulty, Difficulty::Advanced);
        assert_eq!(
            solution.tips,
            templates::study_tips(Subject::General, Difficulty::Advanced)
        );
    }
}
