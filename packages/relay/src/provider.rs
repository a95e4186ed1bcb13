//! Speech provider seam.
//!
//! The relay talks to the provider through [`SpeechProvider`] so a missing
//! credential can be modelled as "no provider" and tests can count calls.
use async_trait::async_trait;
use audioforge_domain::{RelayError, SynthesisRequest, VoiceId};
use audioforge_elevenlabs::endpoints::genai::tts::{TextToSpeech, TextToSpeechBody};
use audioforge_elevenlabs::{ElevenLabsClient, Error};
use bytes::Bytes;
use tracing::error;

#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize `request.text` with `voice_id`, returning MP3 bytes.
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        voice_id: &VoiceId,
    ) -> Result<Bytes, RelayError>;
}

#[async_trait]
impl SpeechProvider for ElevenLabsClient {
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        voice_id: &VoiceId,
    ) -> Result<Bytes, RelayError> {
        let body = TextToSpeechBody::new(
            request.text.clone(),
            request.model_id.clone(),
            request.voice_settings,
        );

        self.hit(TextToSpeech::new(voice_id.clone(), body))
            .await
            .map_err(|err| {
                error!(error = %err, status = ?err.status(), "ElevenLabs API error");
                provider_error(err)
            })
    }
}

/// Non-success statuses carry the provider's message; everything else is a
/// runtime failure.
pub fn provider_error(err: Error) -> RelayError {
    match &err {
        Error::HttpError { .. } => RelayError::Provider(
            err.provider_message()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
        ),
        _ => RelayError::Runtime(err.to_string()),
    }
}
