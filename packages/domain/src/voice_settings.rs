//! Provider voice settings.
//!
//! Four knobs are forwarded to the synthesis provider on every call. The
//! relay starts from [`VoiceSettings::default`] and overlays whatever the
//! caller supplied; values are passed through without range checks.
use serde::{Deserialize, Serialize};

/// Effective voice settings sent to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Consistency of the voice, nominally 0.0 to 1.0.
    pub stability: f64,
    /// How closely output tracks the source voice, nominally 0.0 to 1.0.
    pub similarity_boost: f64,
    /// Style exaggeration, nominally 0.0 to 1.0.
    pub style: f64,
    /// Whether the provider should apply speaker boost.
    pub use_speaker_boost: bool,
}

impl VoiceSettings {
    pub const DEFAULT_STABILITY: f64 = 0.5;
    pub const DEFAULT_SIMILARITY_BOOST: f64 = 0.75;
    pub const DEFAULT_STYLE: f64 = 0.0;
    pub const DEFAULT_USE_SPEAKER_BOOST: bool = true;

    /// Overlay the fields present in `overrides`, keeping the rest.
    pub fn merge(self, overrides: &VoiceSettingsOverride) -> Self {
        Self {
            stability: overrides.stability.unwrap_or(self.stability),
            similarity_boost: overrides.similarity_boost.unwrap_or(self.similarity_boost),
            style: overrides.style.unwrap_or(self.style),
            use_speaker_boost: overrides.use_speaker_boost.unwrap_or(self.use_speaker_boost),
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: Self::DEFAULT_STABILITY,
            similarity_boost: Self::DEFAULT_SIMILARITY_BOOST,
            style: Self::DEFAULT_STYLE,
            use_speaker_boost: Self::DEFAULT_USE_SPEAKER_BOOST,
        }
    }
}

/// Partial settings as sent by a caller. Missing or `null` fields keep
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettingsOverride {
    #[serde(default)]
    pub stability: Option<f64>,
    #[serde(default)]
    pub similarity_boost: Option<f64>,
    #[serde(default)]
    pub style: Option<f64>,
    #[serde(default)]
    pub use_speaker_boost: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_override_keeps_defaults() {
        let merged = VoiceSettings::default().merge(&VoiceSettingsOverride::default());
        assert_eq!(merged, VoiceSettings::default());
        assert_eq!(merged.stability, 0.5);
        assert_eq!(merged.similarity_boost, 0.75);
        assert_eq!(merged.style, 0.0);
        assert!(merged.use_speaker_boost);
    }

    #[test]
    fn partial_override_touches_only_present_fields() {
        let overrides: VoiceSettingsOverride =
            serde_json::from_str(r#"{"stability": 0.9}"#).expect("valid override");
        let merged = VoiceSettings::default().merge(&overrides);

        assert_eq!(merged.stability, 0.9);
        assert_eq!(merged.similarity_boost, 0.75);
        assert_eq!(merged.style, 0.0);
        assert!(merged.use_speaker_boost);
    }

    #[test]
    fn out_of_range_values_are_forwarded() {
        let overrides = VoiceSettingsOverride {
            stability: Some(3.5),
            style: Some(-1.0),
            use_speaker_boost: Some(false),
            ..Default::default()
        };
        let merged = VoiceSettings::default().merge(&overrides);

        assert_eq!(merged.stability, 3.5);
        assert_eq!(merged.style, -1.0);
        assert!(!merged.use_speaker_boost);
    }

    #[test]
    fn unrecognised_keys_are_dropped() {
        let overrides: VoiceSettingsOverride =
            serde_json::from_str(r#"{"stability": 0.9, "speed": 1.2}"#).expect("valid override");
        let merged = VoiceSettings::default().merge(&overrides);

        assert_eq!(merged.stability, 0.9);
        let json = serde_json::to_value(merged).expect("serializable");
        assert!(json.get("speed").is_none());
        assert_eq!(json.as_object().map(|o| o.len()), Some(4));
    }

    #[test]
    fn null_fields_count_as_absent() {
        let overrides: VoiceSettingsOverride =
            serde_json::from_str(r#"{"style": null, "similarity_boost": 0.2}"#)
                .expect("valid override");
        let merged = VoiceSettings::default().merge(&overrides);

        assert_eq!(merged.style, 0.0);
        assert_eq!(merged.similarity_boost, 0.2);
    }

    #[test]
    fn serializes_with_provider_keys() {
        let json = serde_json::to_value(VoiceSettings::default()).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "stability": 0.5,
                "similarity_boost": 0.75,
                "style": 0.0,
                "use_speaker_boost": true
            })
        );
    }
}
