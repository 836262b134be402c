//! The speech synthesis contract.

use async_trait::async_trait;

use crate::error::Result;

/// A hosted text-to-speech backend.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Pick a voice when the caller has no preference.
    ///
    /// The demo auto-selects the first voice the account offers.
    async fn default_voice(&self) -> Result<String>;

    /// Convert text to audio bytes with the given voice.
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>>;
}
