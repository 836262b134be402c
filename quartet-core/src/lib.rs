//! Shared agent abstraction for the Quartet demo.
//!
//! Defines the [`Agent`] trait every agent implements, the closed
//! [`AgentKind`] set used for dispatch, and the common error type.

pub mod agent;
pub mod error;
pub mod kind;

pub use agent::{Agent, AgentInput, AgentOutput, Severity};
pub use error::{QuartetError, Result};
pub use kind::AgentKind;
