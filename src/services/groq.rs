// src/services/groq.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "llama-3.3-70b-versatile";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2048;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    // Carries the provider's own error text so callers can match on it.
    #[error("{0}")]
    Api(String),
}

#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run one completion for the composed prompt. `Ok(None)` means the
    /// provider answered but produced no usable text.
    async fn complete(&self, prompt: &str) -> Result<Option<String>, CompletionError>;
}

pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<OutboundMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct OutboundMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: InboundMessage,
}

#[derive(Deserialize)]
struct InboundMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[async_trait]
impl CompletionBackend for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, CompletionError> {
        let body = ChatCompletionRequest {
            model: MODEL,
            messages: vec![OutboundMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let raw = response.text().await.unwrap_or_default();
            // Groq wraps failures as {"error": {"message": ...}}; fall back to
            // the raw body when it doesn't.
            let message = serde_json::from_str::<ApiErrorBody>(&raw)
                .map(|b| b.error.message)
                .unwrap_or(raw);
            return Err(CompletionError::Api(message));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty());

        Ok(text)
    }
}
