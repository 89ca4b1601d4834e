use http::StatusCode;
use seewrite_core::InvalidImage;
use thiserror::Error;
use tts::SynthesisFailure;

/// Errors surfaced to the caller of the pipeline
///
/// Text stages never fail; only boundary rejections and synthesis do.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required request field is missing or empty
    #[error("missing required field: {field}")]
    MissingInput { field: &'static str },

    /// The image payload could not be decoded
    #[error(transparent)]
    InvalidImage(#[from] InvalidImage),

    /// Speech synthesis failed; there is no audio substitute
    #[error("speech synthesis failed: {0}")]
    Synthesis(SynthesisFailure),
}

impl PipelineError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingInput { .. } | Self::InvalidImage(_) => StatusCode::BAD_REQUEST,
            Self::Synthesis(SynthesisFailure::TextTooLong | SynthesisFailure::InvalidVoice) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Synthesis(SynthesisFailure::ServiceUnavailable) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Synthesis(SynthesisFailure::AudioProcessing) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::MissingInput { .. } | Self::InvalidImage(_) => "invalid_request_error",
            Self::Synthesis(_) => "synthesis_error",
        }
    }

    /// Whether the caller may retry the same request later
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Synthesis(reason) => reason.is_retryable(),
            _ => false,
        }
    }
}

impl From<SynthesisFailure> for PipelineError {
    fn from(reason: SynthesisFailure) -> Self {
        Self::Synthesis(reason)
    }
}
