//! Accessibility content pipeline
//!
//! Composes visual signal extraction, multi-backend inference and speech
//! synthesis into the caller-facing operations: describe an image, answer a
//! follow-up question, and narrate either result.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod aws;
mod error;
mod pipeline;
mod prompt;
mod request;

pub use aws::sdk_config;
pub use error::PipelineError;
pub use pipeline::{Narration, Pipeline};
pub use prompt::{DEGRADED_DESCRIPTION, DESCRIPTION_MAX_TOKENS, FOLLOW_UP_MAX_TOKENS, follow_up_fallback};
pub use request::{
    AnswerResponse, AudioResponse, DescribeImageRequest, DescriptionResponse, FollowUpRequest, SpeechRequest,
};
