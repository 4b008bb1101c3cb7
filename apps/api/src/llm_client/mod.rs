/// LLM Client — the single point of entry for external text-generation calls.
///
/// Supports the Anthropic Messages API and OpenAI-compatible Chat Completions.
/// Each call is a single attempt: callers own the fallback, so there is no
/// retry and no backoff here.
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-5";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const MAX_TOKENS: u32 = 2048;
/// Applied when a call does not pass its own timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Which external service, if any, backs content generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderKind {
    #[default]
    None,
    Anthropic,
    OpenAi,
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "local" | "mock" => Ok(ProviderKind::None),
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            "openai" => Ok(ProviderKind::OpenAi),
            other => Err(format!("unknown AI provider '{other}'")),
        }
    }
}

/// Provider settings passed explicitly into the engine at construction.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: String,
    pub model: Option<String>,
    /// Only used by the OpenAI backend.
    pub base_url: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    usage: Option<AnthropicUsage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    kind: ProviderKind,
    api_key: String,
    model: String,
    base_url: String,
}

impl LlmClient {
    /// Returns `Ok(None)` when no provider is configured.
    pub fn from_config(config: &ProviderConfig) -> Result<Option<Self>, LlmError> {
        let (default_model, base_url) = match config.kind {
            ProviderKind::None => return Ok(None),
            ProviderKind::Anthropic => (DEFAULT_ANTHROPIC_MODEL, ANTHROPIC_API_URL.to_string()),
            ProviderKind::OpenAi => (
                DEFAULT_OPENAI_MODEL,
                format!(
                    "{}/chat/completions",
                    config
                        .base_url
                        .as_deref()
                        .unwrap_or(DEFAULT_OPENAI_BASE_URL)
                        .trim_end_matches('/')
                ),
            ),
        };

        Ok(Some(Self {
            client: Client::builder().timeout(DEFAULT_TIMEOUT).build()?,
            kind: config.kind,
            api_key: config.api_key.clone(),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| default_model.to_string()),
            base_url,
        }))
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes one call and returns the text of the reply.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        timeout: Option<Duration>,
    ) -> Result<String, LlmError> {
        let mut request = match self.kind {
            ProviderKind::Anthropic => self.anthropic_request(prompt, system),
            // `from_config` never builds a client for `None`.
            ProviderKind::OpenAi | ProviderKind::None => self.openai_request(prompt, system),
        };
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = match self.kind {
            ProviderKind::Anthropic => {
                let body: AnthropicResponse = response.json().await?;
                if let Some(usage) = &body.usage {
                    debug!(
                        "LLM call succeeded: input_tokens={}, output_tokens={}",
                        usage.input_tokens, usage.output_tokens
                    );
                }
                body.content
                    .into_iter()
                    .find(|b| b.block_type == "text")
                    .and_then(|b| b.text)
            }
            ProviderKind::OpenAi | ProviderKind::None => {
                let body: OpenAiResponse = response.json().await?;
                body.choices.into_iter().next().and_then(|c| c.message.content)
            }
        };

        match text {
            Some(t) if !t.trim().is_empty() => Ok(t),
            _ => Err(LlmError::EmptyContent),
        }
    }

    /// Calls the LLM and deserializes the reply as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        timeout: Option<Duration>,
    ) -> Result<T, LlmError> {
        let text = self.call(prompt, system, timeout).await?;
        serde_json::from_str(strip_json_fences(&text)).map_err(LlmError::Parse)
    }

    fn anthropic_request(&self, prompt: &str, system: &str) -> RequestBuilder {
        let body = AnthropicRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };
        self.client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
    }

    fn openai_request(&self, prompt: &str, system: &str) -> RequestBuilder {
        let body = OpenAiRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            temperature: 0.7,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };
        self.client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
