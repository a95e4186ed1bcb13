//! AudioForge speech relay.
//!
//! Accepts a synthesis request, resolves the voice, forwards it to
//! ElevenLabs and returns the audio as base64, logging a best-effort audit
//! row along the way.

pub mod clip_store;
pub mod config;
pub mod provider;
pub mod relay;
pub mod response;
pub mod routes;
pub mod telemetry;

pub use clip_store::{ClipStore, ClipStoreError, PostgrestClipStore};
pub use config::Args;
pub use provider::SpeechProvider;
pub use relay::{Relay, RelayOutcome};
pub use response::{FailureResponse, SynthesisResponse};
pub use routes::router;
