//! The synthesis relay: one request in, one provider call out.
use std::sync::Arc;

use audioforge_domain::{
    AudioClipRecord, ClipId, ClipOwner, RelayError, SynthesisInput, SynthesisResult,
};
use audioforge_elevenlabs::resolve_voice_id;
use chrono::Utc;
use tracing::{error, info, warn};

use crate::clip_store::ClipStore;
use crate::provider::SpeechProvider;

/// A finished synthesis and the audit row it produced, if any.
#[derive(Debug, Clone)]
pub struct RelayOutcome {
    pub result: SynthesisResult,
    pub clip_id: Option<ClipId>,
}

/// Stateless across calls. A missing provider means the API key was not
/// configured; a missing clip store means auditing is off.
#[derive(Clone, Default)]
pub struct Relay {
    provider: Option<Arc<dyn SpeechProvider>>,
    clips: Option<Arc<dyn ClipStore>>,
}

impl Relay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: Arc<dyn SpeechProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_clip_store(mut self, clips: Arc<dyn ClipStore>) -> Self {
        self.clips = Some(clips);
        self
    }

    /// Run one synthesis call from a raw JSON body.
    pub async fn handle(&self, body: &[u8], owner: ClipOwner) -> Result<RelayOutcome, RelayError> {
        let input: SynthesisInput = serde_json::from_slice(body)?;
        let request = input.into_request()?;
        let provider = self.provider.as_ref().ok_or_else(RelayError::missing_api_key)?;

        let voice_id = resolve_voice_id(&request.voice);
        info!(
            voice = %request.voice,
            %voice_id,
            model = %request.model_id,
            "generating speech"
        );

        let audio = provider.synthesize(&request, &voice_id).await?;
        info!(bytes = audio.len(), "speech generated");

        let result = SynthesisResult {
            audio,
            voice_name: request.voice,
            voice_id,
            model_id: request.model_id,
            voice_settings: request.voice_settings,
        };
        let clip_id = self.record_clip(&owner, &request.text, &result).await;

        Ok(RelayOutcome { result, clip_id })
    }

    /// Never fails the call; errors are logged and yield no id.
    async fn record_clip(
        &self,
        owner: &ClipOwner,
        prompt: &str,
        result: &SynthesisResult,
    ) -> Option<ClipId> {
        let Some(clips) = &self.clips else {
            warn!("clip store not configured, skipping audit row");
            return None;
        };

        let record = AudioClipRecord::synthesized(owner, prompt, result, Utc::now());
        match clips.insert(&record).await {
            Ok(id) => Some(id),
            Err(err) => {
                error!(error = %err, user_id = %owner.user_id, "failed to record audio clip");
                None
            }
        }
    }
}
