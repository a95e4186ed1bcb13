//! Audit row written to the `audio_clips` collection after a synthesis.
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::synthesis::SynthesisResult;
use crate::voice_id::VoiceId;
use crate::voice_settings::VoiceSettings;

/// Characters of prompt text kept in the clip name.
pub const CLIP_NAME_PROMPT_CHARS: usize = 50;

pub const CLIP_TYPE_SYNTHESIZED: &str = "synthesized";

/// Identifier the backend assigned to an inserted clip.
pub type ClipId = String;

/// Who asked for the clip, taken from request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipOwner {
    pub user_id: String,
    pub track_id: Option<String>,
}

impl ClipOwner {
    pub const ANONYMOUS: &'static str = "anonymous";
}

impl Default for ClipOwner {
    fn default() -> Self {
        Self {
            user_id: Self::ANONYMOUS.to_string(),
            track_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioClipRecord {
    pub user_id: String,
    pub track_id: Option<String>,
    pub clip_name: String,
    /// Not populated by the relay; storage upload happens elsewhere.
    pub audio_url: String,
    pub clip_type: String,
    pub start_time: f64,
    /// Audio is never decoded here, so timing fields stay at zero.
    pub end_time: f64,
    pub duration: f64,
    pub generation_prompt: String,
    pub generation_model: String,
    pub metadata: ClipMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipMetadata {
    pub voice: String,
    pub voice_id: VoiceId,
    pub voice_settings: VoiceSettings,
    pub audio_format: String,
    pub generated_at: String,
}

impl AudioClipRecord {
    pub fn synthesized(
        owner: &ClipOwner,
        prompt: &str,
        result: &SynthesisResult,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: owner.user_id.clone(),
            track_id: owner.track_id.clone(),
            clip_name: clip_name(prompt),
            audio_url: String::new(),
            clip_type: CLIP_TYPE_SYNTHESIZED.to_string(),
            start_time: 0.0,
            end_time: 0.0,
            duration: 0.0,
            generation_prompt: prompt.to_string(),
            generation_model: format!("elevenlabs_{}", result.model_id),
            metadata: ClipMetadata {
                voice: result.voice_name.clone(),
                voice_id: result.voice_id.clone(),
                voice_settings: result.voice_settings,
                audio_format: "mp3".to_string(),
                generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }
}

/// `"TTS: "` plus the first characters of the prompt and an ellipsis.
pub fn clip_name(prompt: &str) -> String {
    let head: String = prompt.chars().take(CLIP_NAME_PROMPT_CHARS).collect();
    format!("TTS: {head}...")
}
