//! Premade ElevenLabs voices offered by the studio.
//!
//! Callers address voices by lowercase name. Anything that is not in this
//! table is treated as a literal provider voice id.

use audioforge_domain::VoiceId;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Voice {
    Aria,
    Roger,
    Sarah,
    Laura,
    Charlie,
    George,
    Callum,
    River,
    Liam,
    Charlotte,
    Alice,
    Matilda,
    Will,
    Jessica,
    Eric,
    Chris,
    Brian,
    Daniel,
    Lily,
    Bill,
}

impl Voice {
    /// Get the ElevenLabs voice ID for this voice
    pub fn id(self) -> &'static str {
        match self {
            Voice::Aria => "9BWtsMINqrJLrRacOk9x",
            Voice::Roger => "CwhRBWXzGAHq8TQ4Fs17",
            Voice::Sarah => "EXAVITQu4vr4xnSDxMaL",
            Voice::Laura => "FGY2WhTYpPnrIDTdsKH5",
            Voice::Charlie => "IKne3meq5aSn9XLyUdCD",
            Voice::George => "JBFqnCBsd6RMkjVDRZzb",
            Voice::Callum => "N2lVS1w4EtoT3dr4eOWO",
            Voice::River => "SAz9YHcvj6GT2YYXdXww",
            Voice::Liam => "TX3LPaxmHKxFdv7VOQHJ",
            Voice::Charlotte => "XB0fDUnXU5powFXDhCwa",
            Voice::Alice => "Xb7hH8MSUJpSbSDYk0k2",
            Voice::Matilda => "XrExE9yKIg1WjnnlVkGX",
            Voice::Will => "bIHbv24MWmeRgasZH58o",
            Voice::Jessica => "cgSgspJ2msm6clMCkdW9",
            Voice::Eric => "cjVigY5qzO86Huf0OWal",
            Voice::Chris => "iP95p4xoKVk53GoZ742B",
            Voice::Brian => "nPczCjzI2devNBz1zQrb",
            Voice::Daniel => "onwK4e9ZLuTAKqWW03F9",
            Voice::Lily => "pFZP5JQG7iQjIQuC4Bku",
            Voice::Bill => "pqHfZKP75CvOlQylNhV4",
        }
    }

    /// Lowercase name callers use to pick this voice.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parse a voice from a string name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Voice> {
        Voice::from_str(name).ok()
    }

    /// Get all available voices
    pub fn all() -> Vec<Voice> {
        Voice::iter().collect()
    }
}

impl From<Voice> for VoiceId {
    fn from(voice: Voice) -> VoiceId {
        VoiceId::new(voice.id())
    }
}

/// Map a voice name to its provider id, passing unknown names through as ids.
pub fn resolve_voice_id(name: &str) -> VoiceId {
    match Voice::from_name(name) {
        Some(voice) => voice.into(),
        None => VoiceId::new(name),
    }
}

/// Names of every voice in the table, in table order.
pub fn available_voice_names() -> Vec<&'static str> {
    Voice::iter().map(Voice::name).collect()
}
