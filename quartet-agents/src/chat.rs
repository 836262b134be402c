//! Chat agent: forwards a line of text to a hosted chat model.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use quartet_core::{Agent, AgentInput, AgentOutput, QuartetError, Result};
use quartet_model::{ChatModel, Message};

/// Single-turn chat over a [`ChatModel`].
///
/// Stateless: each input becomes exactly one user message. Transcript
/// display is the shell's concern.
pub struct ChatAgent {
    model: Arc<dyn ChatModel>,
}

impl ChatAgent {
    /// Create a chat agent over the given model.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Agent for ChatAgent {
    fn name(&self) -> &str {
        "chat"
    }

    async fn handle(&self, input: AgentInput) -> Result<AgentOutput> {
        let AgentInput::Text(text) = input else {
            return Err(QuartetError::Unsupported("chat agent takes text input".into()));
        };

        let reply = self
            .model
            .complete(&[Message::user(text)])
            .await
            .map_err(|e| QuartetError::Model(e.to_string()))?;

        info!(model = self.model.name(), reply_len = reply.len(), "chat turn completed");
        Ok(AgentOutput::info(reply))
    }
}
