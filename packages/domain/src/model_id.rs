//! Provider model identifiers.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ModelId {
    /// Multilingual model v2.
    #[default]
    MultilingualV2,
    /// Turbo model v2.5 (balanced speed/quality).
    TurboV2_5,
    /// Turbo model v2, English only.
    TurboV2,
    /// English model v2.
    EnglishV2,
    /// Flash model v2.5 (low latency).
    FlashV2_5,
    /// Any other identifier, forwarded verbatim.
    Custom(String),
}

impl ModelId {
    /// Wire identifier understood by the provider.
    pub fn as_str(&self) -> &str {
        match self {
            ModelId::MultilingualV2 => "eleven_multilingual_v2",
            ModelId::TurboV2_5 => "eleven_turbo_v2_5",
            ModelId::TurboV2 => "eleven_turbo_v2",
            ModelId::EnglishV2 => "eleven_english_v2",
            ModelId::FlashV2_5 => "eleven_flash_v2_5",
            ModelId::Custom(id) => id,
        }
    }

    /// Known models, in the order the studio offers them.
    pub fn known() -> [ModelId; 5] {
        [
            ModelId::MultilingualV2,
            ModelId::TurboV2_5,
            ModelId::TurboV2,
            ModelId::EnglishV2,
            ModelId::FlashV2_5,
        ]
    }
}

impl From<&str> for ModelId {
    fn from(value: &str) -> Self {
        ModelId::known()
            .into_iter()
            .find(|model| model.as_str() == value)
            .unwrap_or_else(|| ModelId::Custom(value.to_string()))
    }
}

impl From<String> for ModelId {
    fn from(value: String) -> Self {
        match ModelId::from(value.as_str()) {
            ModelId::Custom(_) => ModelId::Custom(value),
            known => known,
        }
    }
}

impl FromStr for ModelId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ModelId::from(s))
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ModelId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ModelId::from)
    }
}
