use serde::Serialize;

use crate::error::SynthesisFailure;

/// Request handed to a TTS provider, already validated and truncated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    /// Text to speak
    pub text: String,
    /// Supported voice identifier (e.g. "Joanna")
    pub voice: String,
    /// Output sample rate in Hz
    pub sample_rate: u32,
}

/// Raw audio response from a TTS provider
pub struct SpeechResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type reported by the provider (e.g. "audio/mpeg")
    pub content_type: String,
}

/// Audio ready for transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesizedAudio {
    /// Base64-encoded audio bytes
    pub audio_base64: String,
    /// Always `audio/mp3`
    pub content_type: String,
    /// Voice actually used after allow-list substitution
    pub voice_id: String,
    /// Characters submitted, including any ellipsis
    pub text_length: usize,
    /// Text was cut to the provider limit
    pub truncated: bool,
}

/// Outcome of a synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisResult {
    Audio(SynthesizedAudio),
    Failed { reason: SynthesisFailure },
}

impl SynthesisResult {
    pub const fn audio(&self) -> Option<&SynthesizedAudio> {
        match self {
            Self::Audio(audio) => Some(audio),
            Self::Failed { .. } => None,
        }
    }

    /// Convert into a `Result`, treating a failure as an error
    pub fn into_result(self) -> Result<SynthesizedAudio, SynthesisFailure> {
        match self {
            Self::Audio(audio) => Ok(audio),
            Self::Failed { reason } => Err(reason),
        }
    }
}
