//! The four concrete agents of the Quartet demo.
//!
//! Each agent implements [`quartet_core::Agent`] over its collaborator:
//! a chat model, the document pipeline, a speech synthesizer, or nothing
//! at all (the automation agent only simulates its side effects).

pub mod automation;
pub mod chat;
pub mod document;
pub mod voice;

pub use automation::{AutomationAgent, AutomationTask};
pub use chat::ChatAgent;
pub use document::DocumentAgent;
pub use voice::VoiceAgent;
