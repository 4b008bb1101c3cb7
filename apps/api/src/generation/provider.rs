//! Provider Adapter — pluggable external implementation of the content
//! operations.
//!
//! `ContentEngine` holds an optional `Arc<dyn ContentProvider>` and falls back
//! to the local assemblers whenever it returns an error.

use std::time::Duration;

use async_trait::async_trait;

use crate::generation::prompts::{
    render, DOUBT_PROMPT_TEMPLATE, STUDY_PLAN_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE,
};
use crate::generation::summarizer::reading_time;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, TUTOR_PERSONA};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::doubt::DoubtSolution;
use crate::models::study::{StudyPlanTask, UserGoalProfile};
use crate::models::summary::{SummaryLength, SummaryOptions, TextSummary};

/// Doubt solving waits at most this long for the provider.
pub const DOUBT_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn study_plan(&self, profile: &UserGoalProfile) -> Result<Vec<StudyPlanTask>, LlmError>;

    async fn solve_doubt(&self, question: &str, context: &str)
        -> Result<DoubtSolution, LlmError>;

    async fn summarize(&self, text: &str, options: SummaryOptions)
        -> Result<TextSummary, LlmError>;
}

/// Provider backed by `LlmClient` (Anthropic or OpenAI-compatible).
pub struct LlmContentProvider {
    llm: LlmClient,
    name: String,
}

impl LlmContentProvider {
    pub fn new(llm: LlmClient) -> Self {
        let name = format!("{:?}/{}", llm.kind(), llm.model()).to_lowercase();
        Self { llm, name }
    }
}

fn system_prompt() -> String {
    format!("{TUTOR_PERSONA} {JSON_ONLY_SYSTEM}")
}

#[async_trait]
impl ContentProvider for LlmContentProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn study_plan(&self, profile: &UserGoalProfile) -> Result<Vec<StudyPlanTask>, LlmError> {
        let profile_json = serde_json::to_string_pretty(profile)?;
        let prompt = render(
            STUDY_PLAN_PROMPT_TEMPLATE,
            &[
                ("profile_json", profile_json.as_str()),
                ("focus_area", profile.focus_area()),
            ],
        );

        let tasks: Vec<StudyPlanTask> = self.llm.call_json(&prompt, &system_prompt(), None).await?;
        if tasks.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(tasks)
    }

    async fn solve_doubt(
        &self,
        question: &str,
        context: &str,
    ) -> Result<DoubtSolution, LlmError> {
        let prompt = render(
            DOUBT_PROMPT_TEMPLATE,
            &[("question", question), ("context", context)],
        );

        let solution: DoubtSolution = self
            .llm
            .call_json(&prompt, &system_prompt(), Some(DOUBT_TIMEOUT))
            .await?;
        if solution.explanation.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(solution)
    }

    async fn summarize(
        &self,
        text: &str,
        options: SummaryOptions,
    ) -> Result<TextSummary, LlmError> {
        let length = match options.length {
            SummaryLength::Short => "short (a few sentences)",
            SummaryLength::Medium => "medium (one paragraph)",
            SummaryLength::Long => "long (several paragraphs)",
        };
        let prompt = render(SUMMARY_PROMPT_TEMPLATE, &[("length", length), ("text", text)]);

        let mut summary: TextSummary = self.llm.call_json(&prompt, &system_prompt(), None).await?;
        if summary.summary.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        // Counts always describe the input text, whatever the model reported.
        summary.word_count = text.split_whitespace().count();
        summary.reading_time = reading_time(summary.word_count);
        Ok(summary)
    }
}
