//! Groq chat completions client (OpenAI-compatible wire format).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{ModelError, Result};
use crate::model::{ChatModel, Message};

/// The Groq OpenAI-compatible API root.
const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// The default chat model.
const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// A [`ChatModel`] backed by the Groq chat completions API.
///
/// # Example
///
/// ```rust,ignore
/// use quartet_model::{ChatModel, GroqClient, Message};
///
/// let client = GroqClient::from_env()?;
/// let reply = client.complete(&[Message::user("hello")]).await?;
/// ```
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ModelError::Config("API key must not be empty".into()));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: GROQ_API_BASE.into(),
            model: DEFAULT_MODEL.into(),
        })
    }

    /// Create a client from the `GROQ_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            ModelError::Config("GROQ_API_KEY environment variable not set".into())
        })?;
        Self::new(api_key)
    }

    /// Set the model name (e.g. `llama3-70b-8192`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different OpenAI-compatible API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[async_trait]
impl ChatModel for GroqClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, messages: &[Message]) -> Result<String> {
        debug!(model = %self.model, message_count = messages.len(), "sending completion request");

        let url = format!("{}/chat/completions", self.base_url);
        let body = CompletionRequest { model: &self.model, messages };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(model = %self.model, error = %e, "completion request failed");
                ModelError::Http(format!("request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(model = %self.model, %status, "API returned an error");
            return Err(ModelError::Api { status: status.as_u16(), message });
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(format!("invalid response body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ModelError::InvalidResponse("response contained no choices".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(GroqClient::new(""), Err(ModelError::Config(_))));
    }

    #[test]
    fn request_serializes_openai_shape() {
        let messages = [Message::user("hi")];
        let body = CompletionRequest { model: "llama3-8b-8192", messages: &messages };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama3-8b-8192");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
    }

    #[test]
    fn roles_use_lowercase_wire_names() {
        assert_eq!(serde_json::to_value(Role::Assistant).unwrap(), "assistant");
        assert_eq!(serde_json::to_value(Role::System).unwrap(), "system");
    }
}
