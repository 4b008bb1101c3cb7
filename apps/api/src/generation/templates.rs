//! Template Bank — static content fragments keyed by subject, question type
//! and difficulty.
//!
//! The five detected subjects are served entirely from lookup. `General`
//! is the exception: its concepts are derived from the question text itself
//! and its explanation acknowledges any extra context the student gave.

use crate::models::doubt::{Difficulty, QuestionType, Subject};

/// Common words dropped before deriving concepts from a question.
const STOP_WORDS: &[&str] = &[
    "about", "after", "again", "being", "between", "could", "does", "explain", "from", "have",
    "please", "should", "their", "there", "these", "thing", "those", "understand", "what",
    "where", "which", "while", "would",
];

const MAX_DERIVED_CONCEPTS: usize = 3;
const MIN_CONCEPT_LEN: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Explanations
// ────────────────────────────────────────────────────────────────────────────

/// Explanation for a detected subject. Falls back to the subject's generic
/// explanation for question types without a dedicated template.
pub fn explanation(subject: Subject, question_type: QuestionType) -> &'static str {
    use QuestionType::*;
    match (subject, question_type) {
        (Subject::Mathematics, Explanation) => {
            "Mathematical ideas are easiest to understand when you see why each rule holds. \
             Start from the definitions involved, follow how each step preserves equality or \
             structure, and check the result against a simple case you can verify by hand."
        }
        (Subject::Mathematics, ProblemSolving) => {
            "To solve this problem, identify what is given and what is asked, choose the \
             formula or method that links them, and work through the algebra carefully. \
             Finish by substituting your answer back to confirm it satisfies the original \
             conditions."
        }
        (Subject::Mathematics, Definition) => {
            "In mathematics a definition fixes exactly which objects a term refers to. \
             Read it precisely, note every condition it imposes, and test it on small \
             examples and counterexamples to see where its boundaries lie."
        }
        (Subject::Mathematics, _) => {
            "This is a mathematics question. Break it into smaller parts, relate each part \
             to a rule or theorem you already know, and combine the pieces into a complete, \
             checked answer."
        }

        (Subject::ComputerScience, Explanation) => {
            "Computing concepts are best understood by tracing what the program or \
             algorithm does with concrete input. Follow the data through each step, note \
             how state changes, and reason about how the work grows as the input grows."
        }
        (Subject::ComputerScience, ProblemSolving) => {
            "Approach this programming problem by first pinning down the inputs, outputs and \
             edge cases. Sketch an algorithm in plain language, choose suitable data \
             structures, implement it, and test it against both typical and boundary cases."
        }
        (Subject::ComputerScience, Definition) => {
            "In computer science a term usually names either an abstraction or a technique. \
             Look at what problem it solves, which operations it supports, and what it \
             costs in time and memory."
        }
        (Subject::ComputerScience, _) => {
            "This is a computer science question. Relate it to the underlying data, the \
             operations performed on that data, and the trade-offs between different \
             approaches."
        }

        (Subject::Physics, Explanation) => {
            "Physical phenomena follow from a small number of laws. Identify which \
             quantities are involved, which law connects them, and picture what happens to \
             the system over time before writing any equations."
        }
        (Subject::Physics, ProblemSolving) => {
            "Solve this physics problem by drawing the situation, listing known and unknown \
             quantities with units, selecting the governing law, and solving symbolically \
             before substituting numbers. Check that the units and magnitude make sense."
        }
        (Subject::Physics, Definition) => {
            "A physics definition ties a name to a measurable quantity. Note its units, \
             whether it is a scalar or a vector, and the law or experiment in which it \
             appears."
        }
        (Subject::Physics, _) => {
            "This is a physics question. Think about the forces, energy and motion involved, \
             and connect the situation to the fundamental laws that govern it."
        }

        (Subject::Chemistry, Explanation) => {
            "Chemical behaviour is explained by how atoms and electrons arrange themselves. \
             Look at the structure of the species involved, the bonds formed or broken, and \
             the energy changes that drive the process."
        }
        (Subject::Chemistry, ProblemSolving) => {
            "Work through this chemistry problem by writing a balanced equation, converting \
             given quantities to moles, applying the stoichiometric ratios, and converting \
             back to the requested units."
        }
        (Subject::Chemistry, Definition) => {
            "A chemistry definition usually describes a substance, a property or a type of \
             reaction. Relate it to atomic structure and to an example you can picture in \
             the lab."
        }
        (Subject::Chemistry, _) => {
            "This is a chemistry question. Consider the substances involved, how their \
             particles interact, and what conservation of mass and charge requires."
        }

        (Subject::Biology, Explanation) => {
            "Biological processes make sense when you connect structure to function. \
             Identify the organism or cell component involved, what it needs to achieve, \
             and how each stage of the process contributes to that goal."
        }
        (Subject::Biology, ProblemSolving) => {
            "Tackle this biology problem by identifying the system and the level of \
             organisation involved, recalling the relevant process or inheritance pattern, \
             and reasoning step by step from cause to effect."
        }
        (Subject::Biology, Definition) => {
            "A biology definition places a term within a living system. Note where it \
             occurs, what role it plays, and how it relates to neighbouring structures or \
             processes."
        }
        (Subject::Biology, _) => {
            "This is a biology question. Relate it to the structures involved, the \
             processes that keep organisms alive, and how those processes are regulated."
        }

        (Subject::General, _) => GENERIC_EXPLANATION,
    }
}

const GENERIC_EXPLANATION: &str = "Let's break this question down. Start by identifying the \
    key ideas involved, connect them to what you already know, and build up to the full \
    answer one step at a time.";

const CONTEXT_ACKNOWLEDGEMENT: &str = " Taking the additional context you provided into \
    account, focus on the details it highlights and how they narrow down the problem.";

/// Explanation for questions that matched no subject keyword.
pub fn general_explanation(question: &str, context: &str) -> String {
    let question = question.trim();
    let mut text = if question.is_empty() {
        GENERIC_EXPLANATION.to_string()
    } else {
        format!("Regarding \"{question}\": {GENERIC_EXPLANATION}")
    };
    if !context.trim().is_empty() {
        text.push_str(CONTEXT_ACKNOWLEDGEMENT);
    }
    text
}

// ────────────────────────────────────────────────────────────────────────────
// Steps
// ────────────────────────────────────────────────────────────────────────────

/// Solution steps. Problem-solving questions get the 5-step variant,
/// everything else the 4-step variant.
pub fn steps(subject: Subject, question_type: QuestionType) -> Vec<String> {
    let problem_solving = question_type == QuestionType::ProblemSolving;
    let steps: &[&str] = match (subject, problem_solving) {
        (Subject::Mathematics, true) => &[
            "Identify the given values and what needs to be found",
            "Choose the formula, theorem or method that connects them",
            "Set up the equation or expression",
            "Solve step by step, simplifying as you go",
            "Verify the answer by substituting it back",
        ],
        (Subject::Mathematics, false) => &[
            "Recall the definitions involved",
            "Work through a simple example by hand",
            "Identify the general rule behind the example",
            "Check the rule against an edge case",
        ],
        (Subject::ComputerScience, true) => &[
            "Define the inputs, outputs and constraints",
            "Design the algorithm in plain language or pseudocode",
            "Choose appropriate data structures",
            "Implement the solution",
            "Test with typical and edge-case inputs and analyse complexity",
        ],
        (Subject::ComputerScience, false) => &[
            "Understand the problem the concept solves",
            "Trace it on a small concrete input",
            "Examine its time and space costs",
            "Compare it with an alternative approach",
        ],
        (Subject::Physics, true) => &[
            "Draw a diagram and list known and unknown quantities with units",
            "Identify the physical law that applies",
            "Write the governing equation symbolically",
            "Solve for the unknown and substitute values",
            "Check units and whether the magnitude is reasonable",
        ],
        (Subject::Physics, false) => &[
            "Identify the physical quantities involved",
            "Recall the law that relates them",
            "Visualise how the system behaves over time",
            "Connect the result to an everyday observation",
        ],
        (Subject::Chemistry, true) => &[
            "Write the balanced chemical equation",
            "Convert given quantities to moles",
            "Apply the mole ratio from the equation",
            "Convert moles back to the requested units",
            "Check significant figures and units",
        ],
        (Subject::Chemistry, false) => &[
            "Identify the substances and their structures",
            "Determine which bonds form or break",
            "Consider the energy changes involved",
            "Relate the result to observable properties",
        ],
        (Subject::Biology, true) => &[
            "Identify the biological system and level of organisation",
            "Recall the relevant process or inheritance pattern",
            "Lay out the stages or crosses in order",
            "Reason from cause to effect at each stage",
            "Summarise the outcome and check it against known ratios or facts",
        ],
        (Subject::Biology, false) => &[
            "Identify the structure or organism involved",
            "Describe its function",
            "Explain how the process unfolds stage by stage",
            "Connect it to the wider system it belongs to",
        ],
        (Subject::General, _) => &[
            "Break the question into smaller parts",
            "Identify the key concepts in each part",
            "Connect each concept to what you already know",
            "Combine the parts into a complete answer",
        ],
    };
    to_owned(steps)
}

// ────────────────────────────────────────────────────────────────────────────
// Concepts
// ────────────────────────────────────────────────────────────────────────────

/// Templated concepts for a detected subject. For `General` use
/// [`derive_concepts`] instead.
pub fn concepts(subject: Subject, question_type: QuestionType) -> Vec<String> {
    use QuestionType::*;
    let concepts: &[&str] = match (subject, question_type) {
        (Subject::Mathematics, Explanation) => &[
            "Mathematical Reasoning",
            "Proof Techniques",
            "Patterns",
        ],
        (Subject::Mathematics, ProblemSolving) => &[
            "Problem Decomposition",
            "Formula Application",
            "Verification",
        ],
        (Subject::Mathematics, Definition) => &["Definitions", "Properties", "Counterexamples"],
        (Subject::Mathematics, _) => &["Algebra", "Functions", "Logical Reasoning"],

        (Subject::ComputerScience, Explanation) => &["Algorithms", "Data Flow", "Abstraction"],
        (Subject::ComputerScience, ProblemSolving) => &[
            "Algorithm Design",
            "Data Structures",
            "Complexity Analysis",
        ],
        (Subject::ComputerScience, Definition) => &[
            "Terminology",
            "Abstract Data Types",
            "Use Cases",
        ],
        (Subject::ComputerScience, _) => &["Programming", "Algorithms", "Data Structures"],

        (Subject::Physics, Explanation) => &["Physical Laws", "Cause and Effect", "Models"],
        (Subject::Physics, ProblemSolving) => &[
            "Free Body Diagrams",
            "Equations of Motion",
            "Unit Analysis",
        ],
        (Subject::Physics, Definition) => &["Physical Quantities", "Units", "Vectors and Scalars"],
        (Subject::Physics, _) => &["Mechanics", "Energy", "Forces"],

        (Subject::Chemistry, Explanation) => &[
            "Atomic Structure",
            "Chemical Bonding",
            "Energetics",
        ],
        (Subject::Chemistry, ProblemSolving) => &[
            "Stoichiometry",
            "Mole Concept",
            "Balancing Equations",
        ],
        (Subject::Chemistry, Definition) => &[
            "Chemical Terminology",
            "Periodic Trends",
            "Classification of Matter",
        ],
        (Subject::Chemistry, _) => &["Chemical Reactions", "Bonding", "Periodic Table"],

        (Subject::Biology, Explanation) => &[
            "Structure and Function",
            "Biological Processes",
            "Regulation",
        ],
        (Subject::Biology, ProblemSolving) => &[
            "Genetics",
            "Inheritance Patterns",
            "Data Interpretation",
        ],
        (Subject::Biology, Definition) => &[
            "Biological Terminology",
            "Levels of Organisation",
            "Classification",
        ],
        (Subject::Biology, _) => &["Cell Biology", "Genetics", "Evolution"],

        (Subject::General, _) => &["Critical Thinking", "Problem Solving", "Research Skills"],
    };
    to_owned(concepts)
}

/// Derives up to three concepts from the question's own words: tokens longer
/// than four characters that are not stop words, first letter capitalised.
/// Punctuation attached to a word is kept.
pub fn derive_concepts(question: &str) -> Vec<String> {
    question
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_CONCEPT_LEN)
        .filter(|word| !STOP_WORDS.contains(&word.to_lowercase().as_str()))
        .take(MAX_DERIVED_CONCEPTS)
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Examples
// ────────────────────────────────────────────────────────────────────────────

/// Worked-example prompts. The same three lines serve every subject; only
/// the label changes.
pub fn examples(subject: Subject) -> Vec<String> {
    let label = match subject {
        Subject::Mathematics => "mathematics",
        Subject::ComputerScience => "programming",
        Subject::Physics => "physics",
        Subject::Chemistry => "chemistry",
        Subject::Biology => "biology",
        Subject::General => {
            return to_owned(&[
                "Look for a textbook example that covers the same idea",
                "Try explaining the idea to a friend using an everyday analogy",
                "Write down one situation where this idea would apply",
            ])
        }
    };
    vec![
        format!("Example 1: A basic {label} problem that applies the idea directly"),
        format!("Example 2: A real-world {label} scenario where the idea is used"),
        format!("Example 3: A practice {label} exercise that combines it with earlier topics"),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Study tips
// ────────────────────────────────────────────────────────────────────────────

const GENERIC_TIP: &str = "Review the material regularly, practise with varied problems, \
    and don't hesitate to ask for help when you get stuck. Spaced repetition and active \
    recall work better than rereading.";

/// Tips for a (subject, difficulty) pair, or a generic tip when the pair has
/// no dedicated entry.
pub fn study_tips(subject: Subject, difficulty: Difficulty) -> &'static str {
    use Difficulty::*;
    match (subject, difficulty) {
        (Subject::Mathematics, Beginner) => {
            "Work through plenty of simple examples before moving on, and write out every \
             step. Keep a formula sheet and review it daily."
        }
        (Subject::Mathematics, Intermediate) => {
            "Mix problem types in each practice session so you learn to choose the right \
             method. Re-derive key formulas instead of memorising them."
        }
        (Subject::Mathematics, Advanced) => {
            "Study proofs actively: cover the next line and predict it. Connect new results \
             to theorems you already know and attempt challenging problem sets."
        }
        (Subject::ComputerScience, Beginner) => {
            "Write small programs every day and run them often. Read error messages \
             carefully and trace your code by hand when something surprises you."
        }
        (Subject::ComputerScience, Intermediate) => {
            "Implement classic data structures and algorithms from scratch, then compare \
             with library versions. Practise analysing time and space complexity."
        }
        (Subject::ComputerScience, Advanced) => {
            "Read well-known codebases and papers, build a non-trivial project, and reason \
             about correctness and performance trade-offs explicitly."
        }
        (Subject::Physics, Beginner) => {
            "Always draw a diagram and write units next to every number. Focus on \
             understanding what each law says before memorising equations."
        }
        (Subject::Physics, Intermediate) => {
            "Solve problems symbolically first and substitute numbers last. Check limiting \
             cases to see whether your answer behaves sensibly."
        }
        (Subject::Chemistry, Beginner) => {
            "Learn the first twenty elements and common ions by heart, and practise \
             balancing equations until it feels automatic."
        }
        (Subject::Chemistry, Intermediate) => {
            "Connect reaction types to the underlying electron movements, and practise \
             multi-step stoichiometry problems with careful unit tracking."
        }
        (Subject::Biology, Beginner) => {
            "Use diagrams and flashcards for terminology, and explain each process aloud \
             in your own words."
        }
        (Subject::Biology, Intermediate) => {
            "Build concept maps that link structures to functions across levels of \
             organisation, and practise interpreting experimental data."
        }
        _ => GENERIC_TIP,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Related topics
// ────────────────────────────────────────────────────────────────────────────

pub fn related_topics(subject: Subject) -> Vec<String> {
    let topics: &[&str] = match subject {
        Subject::Mathematics => &[
            "Algebra",
            "Calculus",
            "Geometry",
            "Statistics",
            "Linear Algebra",
        ],
        Subject::ComputerScience => &[
            "Data Structures",
            "Algorithms",
            "Object-Oriented Programming",
            "Databases",
            "Operating Systems",
        ],
        Subject::Physics => &[
            "Mechanics",
            "Thermodynamics",
            "Electromagnetism",
            "Optics",
            "Modern Physics",
        ],
        Subject::Chemistry => &[
            "Atomic Structure",
            "Chemical Bonding",
            "Organic Chemistry",
            "Thermochemistry",
            "Chemical Equilibrium",
        ],
        Subject::Biology => &[
            "Cell Biology",
            "Genetics",
            "Evolution",
            "Ecology",
            "Human Physiology",
        ],
        Subject::General => &["Study Techniques", "Critical Thinking", "Research Methods"],
    };
    to_owned(topics)
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBJECTS: [Subject; 5] = [
        Subject::Mathematics,
        Subject::ComputerScience,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
    ];

    #[test]
    fn test_problem_solving_gets_five_steps() {
        for subject in SUBJECTS {
            assert_eq!(steps(subject, QuestionType::ProblemSolving).len(), 5);
            assert_eq!(steps(subject, QuestionType::Explanation).len(), 4);
            assert_eq!(steps(subject, QuestionType::General).len(), 4);
        }
    }

    #[test]
    fn test_unmatched_question_type_uses_generic_explanation() {
        let comparison = explanation(Subject::Physics, QuestionType::Comparison);
        let example = explanation(Subject::Physics, QuestionType::Example);
        assert_eq!(comparison, example);
        assert_ne!(comparison, explanation(Subject::Physics, QuestionType::Definition));
    }

    #[test]
    fn test_concepts_are_triples() {
        for subject in SUBJECTS {
            for qt in [
                QuestionType::Explanation,
                QuestionType::ProblemSolving,
                QuestionType::Definition,
                QuestionType::Comparison,
            ] {
                assert_eq!(concepts(subject, qt).len(), 3, "{subject} / {qt}");
            }
        }
    }

    #[test]
    fn test_examples_share_template_across_subjects() {
        let math = examples(Subject::Mathematics);
        let physics = examples(Subject::Physics);
        assert_eq!(math.len(), 3);
        assert_eq!(
            math[0].replace("mathematics", "physics"),
            physics[0],
            "only the label differs"
        );
    }

    #[test]
    fn test_tips_fall_back_for_uncovered_pairs() {
        assert_eq!(study_tips(Subject::Physics, Difficulty::Advanced), GENERIC_TIP);
        assert_eq!(study_tips(Subject::General, Difficulty::Beginner), GENERIC_TIP);
        assert_ne!(
            study_tips(Subject::Mathematics, Difficulty::Advanced),
            GENERIC_TIP
        );
    }

    #[test]
    fn test_related_topics_sizes() {
        for subject in SUBJECTS {
            assert_eq!(related_topics(subject).len(), 5);
        }
        assert_eq!(related_topics(Subject::General).len(), 3);
    }

    #[test]
    fn test_derive_concepts_filters_and_capitalizes() {
        let concepts = derive_concepts("Explain how binary search works on sorted arrays");
        // "Explain" is a stop word; "how"/"on" are too short.
        assert_eq!(concepts, vec!["Binary", "Search", "Works"]);
    }

    #[test]
    fn test_derive_concepts_truncates_to_three() {
        let concepts = derive_concepts("history geography literature philosophy economics");
        assert_eq!(concepts, vec!["History", "Geography", "Literature"]);
    }

    #[test]
    fn test_derive_concepts_stop_words_case_insensitive() {
        let concepts = derive_concepts("WHICH THERE tides");
        assert_eq!(concepts, vec!["Tides"]);
    }

    #[test]
    fn test_derive_concepts_empty_question() {
        assert!(derive_concepts("").is_empty());
    }

    #[test]
    fn test_general_explanation_acknowledges_context_only_when_present() {
        let without = general_explanation("Why do tides happen?", "");
        let blank = general_explanation("Why do tides happen?", "   ");
        let with = general_explanation("Why do tides happen?", "I live near the coast");
        assert!(!without.contains("additional context"));
        assert_eq!(without, blank);
        assert!(with.contains("additional context"));
        assert!(with.starts_with(&without));
    }
}
