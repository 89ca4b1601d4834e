use seewrite_config::DEFAULT_VOICE;
use seewrite_core::ImagePayload;
use serde::{Deserialize, Serialize};
use tts::SynthesizedAudio;

use crate::error::PipelineError;

/// Request to describe an uploaded image
#[derive(Debug, Clone, Deserialize)]
pub struct DescribeImageRequest {
    /// Base64 image, optionally as a `data:` URL
    #[serde(default)]
    pub image: String,
}

impl DescribeImageRequest {
    /// Decode the image, rejecting missing or malformed payloads
    pub fn image(&self) -> Result<ImagePayload, PipelineError> {
        if self.image.trim().is_empty() {
            return Err(PipelineError::MissingInput { field: "image" });
        }

        let image = ImagePayload::from_base64(&self.image)?;

        if image.is_empty() {
            return Err(PipelineError::MissingInput { field: "image" });
        }

        Ok(image)
    }
}

/// Follow-up question about a previous description
#[derive(Debug, Clone, Deserialize)]
pub struct FollowUpRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub original_description: String,
}

impl FollowUpRequest {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.question.trim().is_empty() {
            return Err(PipelineError::MissingInput { field: "question" });
        }

        Ok(())
    }
}

/// Direct speech synthesis request
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
}

impl SpeechRequest {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.text.trim().is_empty() {
            return Err(PipelineError::MissingInput { field: "text" });
        }

        Ok(())
    }
}

fn default_voice_id() -> String {
    DEFAULT_VOICE.to_owned()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Synthesized audio for transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioResponse {
    pub audio_base64: String,
    pub content_type: String,
    pub voice_id: String,
    pub text_length: usize,
    pub truncated: bool,
}

impl From<SynthesizedAudio> for AudioResponse {
    fn from(audio: SynthesizedAudio) -> Self {
        Self {
            audio_base64: audio.audio_base64,
            content_type: audio.content_type,
            voice_id: audio.voice_id,
            text_length: audio.text_length,
            truncated: audio.truncated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_image_is_decoded() {
        let request: DescribeImageRequest =
            serde_json::from_str(r#"{"image": "data:image/png;base64,aGVsbG8="}"#).unwrap();

        let image = request.image().unwrap();

        assert_eq!(image.bytes(), b"hello");
        assert_eq!(image.media_type(), Some("image/png"));
    }

    #[test]
    fn missing_image_is_rejected() {
        let request: DescribeImageRequest = serde_json::from_str("{}").unwrap();

        let error = request.image().unwrap_err();

        assert!(matches!(error, PipelineError::MissingInput { field: "image" }));
    }

    #[test]
    fn malformed_image_is_rejected() {
        let request = DescribeImageRequest {
            image: "not base64 at all!".to_owned(),
        };

        assert!(matches!(request.image(), Err(PipelineError::InvalidImage(_))));
    }

    #[test]
    fn follow_up_defaults_description() {
        let request: FollowUpRequest = serde_json::from_str(r#"{"question": "What pumps blood?"}"#).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.original_description, "");
    }

    #[test]
    fn blank_question_is_rejected() {
        let request: FollowUpRequest = serde_json::from_str(r#"{"question": "   "}"#).unwrap();

        assert!(matches!(
            request.validate(),
            Err(PipelineError::MissingInput { field: "question" })
        ));
    }

    #[test]
    fn speech_request_defaults_voice() {
        let request: SpeechRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();

        assert_eq!(request.voice_id, "Joanna");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_speech_text_is_rejected() {
        let request: SpeechRequest = serde_json::from_str(r#"{"text": ""}"#).unwrap();

        assert!(matches!(
            request.validate(),
            Err(PipelineError::MissingInput { field: "text" })
        ));
    }
}
