//! Request and result of one synthesis call.
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use serde::Deserialize;

use crate::model_id::ModelId;
use crate::relay_error::RelayError;
use crate::voice_id::VoiceId;
use crate::voice_settings::{VoiceSettings, VoiceSettingsOverride};

/// Body of an inbound synthesis call, before defaults are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SynthesisInput {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub model_id: Option<ModelId>,
    #[serde(default)]
    pub voice_settings: Option<VoiceSettingsOverride>,
}

impl SynthesisInput {
    /// Validate the text and fill in defaults.
    ///
    /// Text is checked after trimming but forwarded untouched.
    pub fn into_request(self) -> Result<SynthesisRequest, RelayError> {
        let text = match self.text {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(RelayError::missing_text()),
        };

        let voice_settings = match &self.voice_settings {
            Some(overrides) => VoiceSettings::default().merge(overrides),
            None => VoiceSettings::default(),
        };

        Ok(SynthesisRequest {
            text,
            voice: self
                .voice
                .unwrap_or_else(|| SynthesisRequest::DEFAULT_VOICE.to_string()),
            model_id: self.model_id.unwrap_or_default(),
            voice_settings,
        })
    }
}

/// A validated synthesis request. Lives for one call only.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    /// Voice name as supplied by the caller; may also be a raw provider id.
    pub voice: String,
    pub model_id: ModelId,
    pub voice_settings: VoiceSettings,
}

impl SynthesisRequest {
    pub const DEFAULT_VOICE: &'static str = "aria";
}

/// Audio returned by the provider, together with what produced it.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// MP3-encoded audio.
    pub audio: Bytes,
    pub voice_name: String,
    pub voice_id: VoiceId,
    pub model_id: ModelId,
    pub voice_settings: VoiceSettings,
}

impl SynthesisResult {
    pub fn byte_length(&self) -> usize {
        self.audio.len()
    }

    /// Standard, padded base64 of the audio.
    pub fn audio_base64(&self) -> String {
        STANDARD.encode(&self.audio)
    }
}
