//! The [`Agent`] trait and its input/output types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Input handed to an agent by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentInput {
    /// A plain line of text (chat message, search query, task name).
    Text(String),
    /// An uploaded file to ingest.
    File {
        /// The original file name, for messages only.
        name: String,
        /// The raw file contents.
        bytes: Vec<u8>,
    },
}

impl AgentInput {
    /// Convenience constructor for text input.
    pub fn text(s: impl Into<String>) -> Self {
        AgentInput::Text(s.into())
    }
}

/// How an output should be presented to the user.
///
/// Mirrors the success / info / warning feedback the demo UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// The result of one agent turn.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentOutput {
    /// The user-visible message.
    pub text: String,
    /// Presentation hint for the shell.
    pub severity: Severity,
    /// Optional binary payload (synthesized audio).
    pub bytes: Option<Vec<u8>>,
}

impl AgentOutput {
    /// An informational output.
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Info, bytes: None }
    }

    /// A success output.
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Success, bytes: None }
    }

    /// A warning output for user-correctable conditions.
    pub fn warning(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Warning, bytes: None }
    }

    /// Attach a binary payload.
    pub fn with_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.bytes = Some(bytes);
        self
    }
}

/// A handler for one agent kind.
///
/// Each agent is constructed once at the boundary and then handles
/// inputs one at a time; handlers are synchronous in effect (each call
/// runs to completion before the next is issued by the shell).
///
/// # Example
///
/// ```rust,ignore
/// use quartet_core::{Agent, AgentInput};
///
/// let agent: Box<dyn Agent> = make_agent(kind)?;
/// let output = agent.handle(AgentInput::text("hello")).await?;
/// println!("{}", output.text);
/// ```
#[async_trait]
pub trait Agent: Send + Sync {
    /// A short human-readable name for the agent.
    fn name(&self) -> &str;

    /// Handle one input and produce one output.
    async fn handle(&self, input: AgentInput) -> Result<AgentOutput>;
}
