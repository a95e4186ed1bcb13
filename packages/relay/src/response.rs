//! JSON envelopes returned to callers. Both carry `success` so callers can
//! branch on a single field.
use audioforge_domain::{ClipId, ModelId, RelayError, VoiceId, VoiceSettings};
use audioforge_elevenlabs::available_voice_names;
use serde::{Deserialize, Serialize};

use crate::relay::RelayOutcome;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisResponse {
    pub success: bool,
    pub audio_base64: String,
    pub voice_used: String,
    pub voice_id: VoiceId,
    pub model_used: ModelId,
    pub voice_settings: VoiceSettings,
    pub clip_id: Option<ClipId>,
    pub audio_length_bytes: usize,
}

impl From<RelayOutcome> for SynthesisResponse {
    fn from(RelayOutcome { result, clip_id }: RelayOutcome) -> Self {
        Self {
            success: true,
            audio_base64: result.audio_base64(),
            audio_length_bytes: result.byte_length(),
            voice_used: result.voice_name,
            voice_id: result.voice_id,
            model_used: result.model_id,
            voice_settings: result.voice_settings,
            clip_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
    /// Every recognised voice name, so the caller can retry with one.
    pub available_voices: Vec<String>,
}

impl From<&RelayError> for FailureResponse {
    fn from(err: &RelayError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
            available_voices: available_voice_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
