//! ElevenLabs text-to-speech client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::{Result, VoiceError};
use crate::synth::SpeechSynthesizer;

/// The ElevenLabs API root.
const ELEVENLABS_API_BASE: &str = "https://api.elevenlabs.io/v1";

/// The synthesis model the demo uses.
const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";

/// A [`SpeechSynthesizer`] backed by the ElevenLabs API.
///
/// # Example
///
/// ```rust,ignore
/// use quartet_voice::{ElevenLabsClient, SpeechSynthesizer};
///
/// let client = ElevenLabsClient::from_env()?;
/// let voice = client.default_voice().await?;
/// let audio = client.synthesize("hello", &voice).await?;
/// ```
pub struct ElevenLabsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model_id: String,
}

impl ElevenLabsClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(VoiceError::Config("API key must not be empty".into()));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: ELEVENLABS_API_BASE.into(),
            model_id: DEFAULT_MODEL_ID.into(),
        })
    }

    /// Create a client from the `ELEVENLABS_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ELEVENLABS_API_KEY").map_err(|_| {
            VoiceError::Config("ELEVENLABS_API_KEY environment variable not set".into())
        })?;
        Self::new(api_key)
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        error!(%status, "ElevenLabs API returned an error");
        Err(VoiceError::Api { status: status.as_u16(), message })
    }
}

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VoicesResponse {
    voices: Vec<Voice>,
}

#[derive(Deserialize)]
struct Voice {
    voice_id: String,
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn default_voice(&self) -> Result<String> {
        let url = format!("{}/voices", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("xi-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| VoiceError::Http(format!("request failed: {e}")))?;

        let parsed: VoicesResponse = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| VoiceError::InvalidResponse(format!("invalid response body: {e}")))?;

        parsed.voices.into_iter().next().map(|v| v.voice_id).ok_or(VoiceError::NoVoices)
    }

    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>> {
        debug!(voice_id, text_len = text.len(), "synthesizing speech");

        let url = format!("{}/text-to-speech/{voice_id}", self.base_url);
        let body = serde_json::json!({
            "text": text,
            "model_id": self.model_id,
        });

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "synthesis request failed");
                VoiceError::Http(format!("request failed: {e}"))
            })?;

        let audio = Self::check(response)
            .await?
            .bytes()
            .await
            .map_err(|e| VoiceError::InvalidResponse(format!("could not read audio: {e}")))?;

        Ok(audio.to_vec())
    }
}
