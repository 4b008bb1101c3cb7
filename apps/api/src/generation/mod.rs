// Content generation engine: question classifier, template bank, study plan
// and doubt assemblers, extractive summarizer, and the optional external
// provider tried ahead of them. All LLM calls go through llm_client.

pub mod classifier;
pub mod doubt_solver;
pub mod engine;
pub mod handlers;
pub mod prompts;
pub mod provider;
pub mod study_plan;
pub mod summarizer;
pub mod templates;
