//! Hosted chat model client.
//!
//! Exposes the single-turn [`ChatModel`] contract and a [`GroqClient`]
//! implementation against the Groq OpenAI-compatible chat completions
//! API. No streaming and no conversation memory: each call carries
//! exactly the messages the caller provides.

pub mod error;
pub mod groq;
pub mod model;

pub use error::{ModelError, Result};
pub use groq::GroqClient;
pub use model::{ChatModel, Message, Role};
