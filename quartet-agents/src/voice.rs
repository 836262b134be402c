//! Voice agent: text-to-speech over a hosted synthesizer.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use quartet_core::{Agent, AgentInput, AgentOutput, QuartetError, Result};
use quartet_voice::SpeechSynthesizer;

/// Text-to-speech over a [`SpeechSynthesizer`].
///
/// Auto-selects the first available voice per request, as the demo did.
/// The synthesized audio comes back as the output payload; playback is
/// the shell's concern (it writes the bytes to a file).
pub struct VoiceAgent {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl VoiceAgent {
    /// Create a voice agent over the given synthesizer.
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }
}

#[async_trait]
impl Agent for VoiceAgent {
    fn name(&self) -> &str {
        "voice"
    }

    async fn handle(&self, input: AgentInput) -> Result<AgentOutput> {
        let AgentInput::Text(text) = input else {
            return Err(QuartetError::Unsupported("voice agent takes text input".into()));
        };

        let voice_id = self
            .synthesizer
            .default_voice()
            .await
            .map_err(|e| QuartetError::Voice(e.to_string()))?;

        let audio = self
            .synthesizer
            .synthesize(&text, &voice_id)
            .await
            .map_err(|e| QuartetError::Voice(e.to_string()))?;

        info!(voice_id = %voice_id, bytes = audio.len(), "speech synthesized");
        Ok(AgentOutput::success(format!("Synthesized {} bytes of audio.", audio.len()))
            .with_bytes(audio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartet_voice::VoiceError;

    struct FakeSynth {
        fail: bool,
    }

    #[async_trait]
    impl SpeechSynthesizer for FakeSynth {
        async fn default_voice(&self) -> quartet_voice::Result<String> {
            if self.fail {
                return Err(VoiceError::NoVoices);
            }
            Ok("voice-1".into())
        }

        async fn synthesize(&self, text: &str, voice_id: &str) -> quartet_voice::Result<Vec<u8>> {
            assert_eq!(voice_id, "voice-1");
            Ok(text.as_bytes().to_vec())
        }
    }

    #[tokio::test]
    async fn synthesizes_with_the_first_voice() {
        let agent = VoiceAgent::new(Arc::new(FakeSynth { fail: false }));
        let out = agent.handle(AgentInput::text("read this")).await.unwrap();
        assert_eq!(out.bytes.as_deref(), Some(b"read this".as_slice()));
    }

    #[tokio::test]
    async fn synthesizer_failure_maps_to_voice_error() {
        let agent = VoiceAgent::new(Arc::new(FakeSynth { fail: true }));
        let err = agent.handle(AgentInput::text("read this")).await.unwrap_err();
        assert!(matches!(err, QuartetError::Voice(_)));
    }
}
