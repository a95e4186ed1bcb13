//! # AudioForge Domain
//!
//! Shared domain objects for the AudioForge speech relay.
//!
//! This crate holds the value types passed between the provider client and
//! the relay service. It performs no I/O.

pub mod audio_clip;
pub mod model_id;
pub mod relay_error;
pub mod synthesis;
pub mod voice_id;
pub mod voice_settings;

pub use audio_clip::{AudioClipRecord, ClipId, ClipMetadata, ClipOwner};
pub use model_id::ModelId;
pub use relay_error::{RelayError, RelayErrorKind};
pub use synthesis::{SynthesisInput, SynthesisRequest, SynthesisResult};
pub use voice_id::VoiceId;
pub use voice_settings::{VoiceSettings, VoiceSettingsOverride};

/// Prelude module containing commonly used types.
pub mod prelude {
    pub use crate::{
        AudioClipRecord, ClipId, ClipOwner, ModelId, RelayError, SynthesisInput,
        SynthesisRequest, SynthesisResult, VoiceId, VoiceSettings, VoiceSettingsOverride,
    };
}
