//! Error types for the `quartet-voice` crate.

use thiserror::Error;

/// Errors that can occur during speech synthesis.
#[derive(Debug, Error)]
pub enum VoiceError {
    /// The HTTP request could not be completed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API accepted the request but returned an error status.
    #[error("API error ({status}): {message}")]
    Api {
        /// The HTTP status code the API returned.
        status: u16,
        /// The error body, if any.
        message: String,
    },

    /// The account has no voices to select from.
    #[error("No voices available")]
    NoVoices,

    /// The response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A configuration problem detected at construction time.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A convenience result type for voice operations.
pub type Result<T> = std::result::Result<T, VoiceError>;
