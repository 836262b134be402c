//! Text-to-speech client.
//!
//! Exposes the [`SpeechSynthesizer`] contract and an [`ElevenLabsClient`]
//! implementation. The voice agent is optional: when no API key is
//! configured the shell simply does not offer it.

pub mod elevenlabs;
pub mod error;
pub mod synth;

pub use elevenlabs::ElevenLabsClient;
pub use error::{Result, VoiceError};
pub use synth::SpeechSynthesizer;
