//! Question classifier — maps free text to (subject, difficulty, question type).
//!
//! Every table is scanned in order and the first row with a matching keyword
//! wins. Matching is raw substring containment on the lower-cased text, so
//! "equations" matches "equation" and a question mentioning both a math and
//! a biology keyword is always Mathematics. Pure and total.

use crate::models::doubt::{Difficulty, QuestionType, Subject};

/// Priority order: Mathematics → Computer Science → Physics → Chemistry → Biology.
const SUBJECT_RULES: &[(&[&str], Subject)] = &[
    (
        &[
            "math",
            "equation",
            "algebra",
            "calculus",
            "geometry",
            "derivative",
            "integral",
            "trigonometry",
            "probability",
            "statistics",
            "matrix",
            "theorem",
        ],
        Subject::Mathematics,
    ),
    (
        &[
            "algorithm",
            "programming",
            "code",
            "data structure",
            "computer",
            "software",
            "database",
            "recursion",
            "python",
            "javascript",
            "compiler",
        ],
        Subject::ComputerScience,
    ),
    (
        &[
            "physics",
            "force",
            "energy",
            "motion",
            "velocity",
            "acceleration",
            "gravity",
            "momentum",
            "quantum",
            "newton",
        ],
        Subject::Physics,
    ),
    (
        &[
            "chemistry",
            "chemical",
            "molecule",
            "atom",
            "reaction",
            "compound",
            "periodic table",
            "acid",
            "electron",
            "bond",
        ],
        Subject::Chemistry,
    ),
    (
        &[
            "biology",
            "cell",
            "dna",
            "genetic",
            "evolution",
            "organism",
            "protein",
            "photosynthesis",
            "ecosystem",
            "enzyme",
        ],
        Subject::Biology,
    ),
];

/// Advanced is checked before beginner.
const DIFFICULTY_RULES: &[(&[&str], Difficulty)] = &[
    (
        &[
            "advanced",
            "complex",
            "sophisticated",
            "intricate",
            "comprehensive",
        ],
        Difficulty::Advanced,
    ),
    (
        &["basic", "simple", "introduction", "beginner", "fundamental"],
        Difficulty::Beginner,
    ),
];

const QUESTION_TYPE_RULES: &[(&[&str], QuestionType)] = &[
    (&["how", "explain"], QuestionType::Explanation),
    (&["solve", "calculate"], QuestionType::ProblemSolving),
    (&["what is", "define"], QuestionType::Definition),
    (&["compare", "difference"], QuestionType::Comparison),
    (&["example", "demonstrate"], QuestionType::Example),
];

/// The three categorical tags derived from a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub subject: Subject,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
}

/// Classifies a question. Empty input yields General / intermediate / general.
pub fn classify(question: &str) -> Classification {
    let text = question.to_lowercase();
    Classification {
        subject: first_match(&text, SUBJECT_RULES).unwrap_or_default(),
        difficulty: first_match(&text, DIFFICULTY_RULES).unwrap_or_default(),
        question_type: first_match(&text, QUESTION_TYPE_RULES).unwrap_or_default(),
    }
}

pub fn detect_subject(text: &str) -> Subject {
    first_match(&text.to_lowercase(), SUBJECT_RULES).unwrap_or_default()
}

pub fn detect_difficulty(text: &str) -> Difficulty {
    first_match(&text.to_lowercase(), DIFFICULTY_RULES).unwrap_or_default()
}

pub fn detect_question_type(text: &str) -> QuestionType {
    first_match(&text.to_lowercase(), QUESTION_TYPE_RULES).unwrap_or_default()
}

fn first_match<T: Copy>(text: &str, rules: &[(&[&str], T)]) -> Option<T> {
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, tag)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equation_is_mathematics() {
        assert_eq!(
            detect_subject("How do I rearrange this EQUATION?"),
            Subject::Mathematics
        );
    }

    #[test]
    fn test_substring_match_inside_longer_word() {
        // Permissive matching is kept: "equations" contains "equation".
        assert_eq!(detect_subject("systems of equations"), Subject::Mathematics);
    }

    #[test]
    fn test_math_beats_biology_regardless_of_position() {
        let c = classify("In cell biology, which equation models growth?");
        assert_eq!(c.subject, Subject::Mathematics);
    }

    #[test]
    fn test_cs_beats_physics() {
        assert_eq!(
            detect_subject("Write code that simulates gravity"),
            Subject::ComputerScience
        );
    }

    #[test]
    fn test_each_subject_detected() {
        assert_eq!(
            detect_subject("Explain how the sorting algorithm works"),
            Subject::ComputerScience
        );
        assert_eq!(detect_subject("What is momentum?"), Subject::Physics);
        assert_eq!(
            detect_subject("Balance this chemical reaction"),
            Subject::Chemistry
        );
        assert_eq!(detect_subject("Describe photosynthesis"), Subject::Biology);
    }

    #[test]
    fn test_binary_search_without_keyword_is_general() {
        let c = classify("Explain how binary search works");
        assert_eq!(c.subject, Subject::General);
        assert_eq!(c.question_type, QuestionType::Explanation);
    }

    #[test]
    fn test_advanced_checked_before_beginner() {
        assert_eq!(
            detect_difficulty("A simple question about an advanced topic"),
            Difficulty::Advanced
        );
        assert_eq!(
            detect_difficulty("basic introduction please"),
            Difficulty::Beginner
        );
        assert_eq!(detect_difficulty("tell me about it"), Difficulty::Intermediate);
    }

    #[test]
    fn test_question_type_order() {
        // "how" is checked before "solve"
        assert_eq!(
            detect_question_type("How do I solve this?"),
            QuestionType::Explanation
        );
        assert_eq!(
            detect_question_type("Calculate the area"),
            QuestionType::ProblemSolving
        );
        assert_eq!(
            detect_question_type("What is entropy?"),
            QuestionType::Definition
        );
        assert_eq!(
            detect_question_type("Difference between mitosis and meiosis"),
            QuestionType::Comparison
        );
        assert_eq!(
            detect_question_type("Give an example of inertia"),
            QuestionType::Example
        );
        assert_eq!(
            detect_question_type("Photosynthesis in plants"),
            QuestionType::General
        );
    }

    #[test]
    fn test_empty_input_defaults() {
        assert_eq!(classify(""), Classification::default());
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let question = "CALCULATE this Advanced DERIVATIVE for me";
        assert_eq!(
            classify(question),
            Classification {
                subject: detect_subject(question),
                difficulty: detect_difficulty(question),
                question_type: detect_question_type(question),
            }
        );
        assert_eq!(classify(question).subject, Subject::Mathematics);
        assert_eq!(classify(question).difficulty, Difficulty::Advanced);
        assert_eq!(classify(question).question_type, QuestionType::ProblemSolving);
        let c = classify("");
        assert_eq!(c.subject, Subject::General);
        assert_eq!(c.difficulty, Difficulty::Intermediate);
        assert_eq!(c.question_type, QuestionType::General);
    }
}
