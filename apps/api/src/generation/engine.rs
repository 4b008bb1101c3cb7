//! ContentEngine — the entry point the HTTP layer calls.
//!
//! Flow per call: configured provider (single attempt) → on any error,
//! local deterministic assembler. Never returns an error. Holds no mutable
//! state, so one engine is shared by every request.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::generation::doubt_solver::assemble_doubt_solution;
use crate::generation::provider::{ContentProvider, LlmContentProvider};
use crate::generation::study_plan::assemble_study_plan;
use crate::generation::summarizer;
use crate::llm_client::{LlmClient, LlmError, ProviderConfig};
use crate::models::doubt::DoubtSolution;
use crate::models::study::{StudyPlanTask, UserGoalProfile};
use crate::models::summary::{SummaryOptions, TextSummary};

/// Engine settings, built from `Config` at start-up.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub provider: ProviderConfig,
}

/// Where a piece of generated content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Provider,
    Local,
}

#[derive(Debug, Clone, Serialize)]
pub struct Generated<T> {
    pub content: T,
    pub source: ContentSource,
}

impl<T> Generated<T> {
    fn local(content: T) -> Self {
        Self {
            content,
            source: ContentSource::Local,
        }
    }
}

#[derive(Clone, Default)]
pub struct ContentEngine {
    provider: Option<Arc<dyn ContentProvider>>,
}

impl ContentEngine {
    /// Engine with no external provider; every call is served locally.
    pub fn local() -> Self {
        Self { provider: None }
    }

    pub fn with_provider(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, LlmError> {
        match LlmClient::from_config(&config.provider)? {
            Some(llm) => {
                let provider = LlmContentProvider::new(llm);
                info!("Content engine using provider {}", provider.name());
                Ok(Self::with_provider(Arc::new(provider)))
            }
            None => {
                info!("Content engine running with local templates only");
                Ok(Self::local())
            }
        }
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    pub async fn generate_study_plan(
        &self,
        profile: &UserGoalProfile,
    ) -> Generated<Vec<StudyPlanTask>> {
        if let Some(provider) = &self.provider {
            match provider.study_plan(profile).await {
                Ok(tasks) => return from_provider(tasks),
                Err(e) => warn!(
                    "Provider {} failed to generate study plan, using local plan: {e}",
                    provider.name()
                ),
            }
        }
        Generated::local(assemble_study_plan(profile))
    }

    pub async fn generate_doubt_solution(
        &self,
        question: &str,
        context: &str,
    ) -> Generated<DoubtSolution> {
        if let Some(provider) = &self.provider {
            match provider.solve_doubt(question, context).await {
                Ok(solution) => return from_provider(solution),
                Err(e) => warn!(
                    "Provider {} failed to solve doubt, using local solution: {e}",
                    provider.name()
                ),
            }
        }
        Generated::local(assemble_doubt_solution(question, context))
    }

    pub async fn summarize_text(
        &self,
        text: &str,
        options: SummaryOptions,
    ) -> Generated<TextSummary> {
        if let Some(provider) = &self.provider {
            match provider.summarize(text, options).await {
                Ok(summary) => return from_provider(summary),
                Err(e) => warn!(
                    "Provider {} failed to summarize, using local summary: {e}",
                    provider.name()
                ),
            }
        }
        Generated::local(summarizer::summarize_text(text, options))
    }
}

fn from_provider<T>(content: T) -> Generated<T> {
    Generated {
        content,
        source: ContentSource::Provider,
    }
}
