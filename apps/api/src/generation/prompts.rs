// Prompt templates for the external provider. Shared fragments come from
// llm_client::prompts.

/// Fills `{name}` placeholders in one pass. Substituted values are never
/// rescanned, so user text containing `{context}` and the like stays literal.
/// Braces that start no known placeholder are copied through.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = vars.iter().find(|(name, _)| {
            tail[1..].starts_with(name) && tail[1 + name.len()..].starts_with('}')
        });
        match hit {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Study plan prompt. Placeholders: `{profile_json}`, `{focus_area}`.
pub const STUDY_PLAN_PROMPT_TEMPLATE: &str = r#"Create a one-day study plan for this student.

STUDENT PROFILE:
{profile_json}

Main focus area: {focus_area}

Return a JSON ARRAY of 5 to 9 tasks:
[
  {
    "id": "1",
    "title": "Morning Review",
    "description": "Review yesterday's notes and key concepts",
    "duration": "30 minutes",
    "priority": "high",
    "category": "Review",
    "completed": false
  }
]

RULES:
1. `id` values are "1", "2", ... in order
2. `priority` is exactly one of "high", "medium", "low"
3. `duration` is a short human-readable string such as "45 minutes" or "1 hour"
4. If expected study hours exceed current hours, include a task that closes the gap
5. If the expected GPA or self-rating is well above the current one, include a task targeting it
6. `completed` is always false"#;

/// Doubt solving prompt. Placeholders: `{question}`, `{context}`.
pub const DOUBT_PROMPT_TEMPLATE: &str = r#"A student asked the following question.

QUESTION:
{question}

ADDITIONAL CONTEXT (may be empty):
{context}

Return a JSON object with this EXACT schema:
{
  "explanation": "Clear explanation of the answer",
  "steps": ["Step one", "Step two"],
  "concepts": ["Up to three key concepts"],
  "examples": ["Worked example or illustration"],
  "tips": "One short paragraph of study advice",
  "relatedTopics": ["Topic to explore next"],
  "difficulty": "beginner" | "intermediate" | "advanced",
  "subject": "Mathematics" | "Computer Science" | "Physics" | "Chemistry" | "Biology" | "General"
}"#;

/// Summary prompt. Placeholders: `{length}`, `{text}`.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Summarize the study material below. Target length: {length}.

Return a JSON object:
{
  "summary": "The summary text",
  "keyPoints": ["Up to five key points"],
  "wordCount": 0,
  "readingTime": 0
}

`wordCount` is the number of words in the ORIGINAL text and `readingTime` is minutes to read it at 200 words per minute.

MATERIAL:
{text}"#;
