//! Speech synthesis for accessibility output
//!
//! Enforces the provider's content limits (text length, voice allow-list)
//! before calling the synthesis backend, and classifies backend failures.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;
mod synthesizer;
mod types;
mod voice;

pub use error::{Result, SynthesisFailure, TtsError};
pub use provider::{TtsProvider, polly::PollyProvider};
pub use synthesizer::{MAX_TEXT_CHARS, MP3_MIME_TYPE, SpeechSynthesizer};
pub use types::{SpeechRequest, SpeechResponse, SynthesisResult, SynthesizedAudio};
pub use voice::{is_supported_voice, resolve_voice};
