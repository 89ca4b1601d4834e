use thiserror::Error;

pub type Result<T, E = TtsError> = std::result::Result<T, E>;

/// Errors returned by a TTS provider
#[derive(Debug, Error)]
pub enum TtsError {
    /// Text exceeds the provider's length limit
    #[error("text too long: {0}")]
    TextTooLong(String),

    /// Provider does not know the voice
    #[error("invalid voice: {0}")]
    InvalidVoice(String),

    /// Provider is temporarily failing or unreachable
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Any other provider or decoding error
    #[error("provider error: {0}")]
    Provider(String),
}

impl TtsError {
    /// Map a provider error code to an error variant
    pub fn from_code(code: Option<&str>, message: String) -> Self {
        match code {
            Some("TextLengthExceededException") => Self::TextTooLong(message),
            Some("InvalidVoiceId") => Self::InvalidVoice(message),
            Some("ServiceFailureException" | "ThrottlingException") => Self::ServiceUnavailable(message),
            _ => Self::Provider(message),
        }
    }

    /// Caller-facing classification of this error
    pub const fn failure(&self) -> SynthesisFailure {
        match self {
            Self::TextTooLong(_) => SynthesisFailure::TextTooLong,
            Self::InvalidVoice(_) => SynthesisFailure::InvalidVoice,
            Self::ServiceUnavailable(_) => SynthesisFailure::ServiceUnavailable,
            Self::Provider(_) => SynthesisFailure::AudioProcessing,
        }
    }
}

/// Why synthesis produced no audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisFailure {
    #[error("text too long")]
    TextTooLong,
    #[error("invalid voice")]
    InvalidVoice,
    #[error("service unavailable")]
    ServiceUnavailable,
    #[error("audio processing error")]
    AudioProcessing,
}

impl SynthesisFailure {
    /// Whether retrying the same request later may succeed
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::ServiceUnavailable)
    }
}
