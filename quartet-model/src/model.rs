//! The single-turn chat model contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in a chat request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who authored the message.
    pub role: Role,
    /// The message text.
    pub content: String,
}

impl Message {
    /// A user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    /// A system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }
}

/// A hosted chat model behind a single-turn request/response contract.
///
/// No streaming; the model has no memory of prior turns beyond what the
/// caller resends in `messages`.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// The model identifier, for logs and display.
    fn name(&self) -> &str;

    /// Send the messages and return the assistant's reply text.
    async fn complete(&self, messages: &[Message]) -> Result<String>;
}
