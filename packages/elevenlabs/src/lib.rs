//! ElevenLabs text-to-speech client for the AudioForge relay.
//!
//! # Usage
//!
//! ```no_run
//! use audioforge_elevenlabs::*;
//! use audioforge_elevenlabs::endpoints::genai::tts::{TextToSpeech, TextToSpeechBody};
//! use audioforge_domain::{ModelId, VoiceSettings};
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = ElevenLabsClient::new(std::env::var("ELEVENLABS_API_KEY")?)?;
//!     let body = TextToSpeechBody::new("Hello from AudioForge!", ModelId::default(), VoiceSettings::default());
//!     let mp3 = client.hit(TextToSpeech::new(resolve_voice_id("sarah"), body)).await?;
//!     println!("{} bytes of audio", mp3.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub mod endpoints;
pub mod voice;

pub use client::{DEFAULT_BASE_URL, ElevenLabsClient, Result};
pub use error::Error;
pub use voice::{Voice, available_voice_names, resolve_voice_id};
