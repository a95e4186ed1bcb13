//! Unified error for the synthesis relay.
use thiserror::Error;

/// Everything that can turn a synthesis call into a failure response.
///
/// The `Display` text of each variant is what callers see in the `error`
/// field of the failure envelope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelayError {
    /// The request is unusable as sent, e.g. blank text.
    #[error("{0}")]
    InvalidInput(String),
    /// A required credential is not configured.
    #[error("{0}")]
    Configuration(String),
    /// The provider answered with a non-success status.
    #[error("{0}")]
    Provider(String),
    /// Anything else: unreadable request bodies, transport failures.
    #[error("{0}")]
    Runtime(String),
}

/// Coarse classification used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayErrorKind {
    InputValidation,
    Configuration,
    Provider,
}

impl RelayError {
    pub const MISSING_TEXT: &'static str = "Text is required for speech synthesis";
    pub const MISSING_API_KEY: &'static str = "ElevenLabs API key not configured";

    /// Missing or whitespace-only text.
    pub fn missing_text() -> Self {
        RelayError::InvalidInput(Self::MISSING_TEXT.to_string())
    }

    /// No provider credential configured.
    pub fn missing_api_key() -> Self {
        RelayError::Configuration(Self::MISSING_API_KEY.to_string())
    }

    pub fn kind(&self) -> RelayErrorKind {
        match self {
            RelayError::InvalidInput(_) => RelayErrorKind::InputValidation,
            RelayError::Configuration(_) => RelayErrorKind::Configuration,
            RelayError::Provider(_) | RelayError::Runtime(_) => RelayErrorKind::Provider,
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Runtime(format!("invalid request body: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_messages_and_kinds() {
        let missing_text = RelayError::missing_text();
        assert_eq!(missing_text.to_string(), "Text is required for speech synthesis");
        assert_eq!(missing_text.kind(), RelayErrorKind::InputValidation);

        let missing_key = RelayError::missing_api_key();
        assert_eq!(missing_key.to_string(), "ElevenLabs API key not configured");
        assert_eq!(missing_key.kind(), RelayErrorKind::Configuration);

        let provider = RelayError::Provider("ElevenLabs API error: 503".into());
        assert_eq!(provider.to_string(), "ElevenLabs API error: 503");
        assert_eq!(provider.kind(), RelayErrorKind::Provider);
    }

    #[test]
    fn unreadable_json_is_a_runtime_error() {
        let err: RelayError = serde_json::from_str::<serde_json::Value>("{ nope")
            .map_err(RelayError::from)
            .expect_err("invalid json");
        assert!(matches!(err, RelayError::Runtime(ref msg) if msg.starts_with("invalid request body")));
    }
}
