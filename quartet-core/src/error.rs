//! Error types shared across Quartet crates.

use thiserror::Error;

/// Errors surfaced by agents and their collaborators.
#[derive(Debug, Error)]
pub enum QuartetError {
    /// An agent failed while handling an input.
    #[error("Agent error: {0}")]
    Agent(String),

    /// A hosted language model call failed.
    #[error("Model error: {0}")]
    Model(String),

    /// A text-to-speech call failed.
    #[error("Voice error: {0}")]
    Voice(String),

    /// The agent does not support the given input shape.
    #[error("Unsupported input: {0}")]
    Unsupported(String),

    /// A configuration problem detected at construction time.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A convenience result type for agent operations.
pub type Result<T> = std::result::Result<T, QuartetError>;
