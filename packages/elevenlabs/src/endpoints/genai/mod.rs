//! Generative audio endpoints.
use super::*;

pub mod tts;
