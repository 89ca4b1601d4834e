use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_polly::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    types::{Engine, OutputFormat, TextType, VoiceId},
};

use crate::{
    error::TtsError,
    types::{SpeechRequest, SpeechResponse},
};

use super::TtsProvider;

/// Amazon Polly neural voice provider, MP3 output
pub struct PollyProvider {
    client: Client,
}

impl PollyProvider {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl TtsProvider for PollyProvider {
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let SpeechRequest {
            text,
            voice,
            sample_rate,
        } = request;

        tracing::debug!(voice = %voice, sample_rate, input_len = text.len(), "Polly synthesis request");

        let output = self
            .client
            .synthesize_speech()
            .text(text)
            .text_type(TextType::Text)
            .output_format(OutputFormat::Mp3)
            .engine(Engine::Neural)
            .voice_id(VoiceId::from(voice.as_str()))
            .sample_rate(sample_rate.to_string())
            .send()
            .await
            .map_err(|e| {
                let error = classify_sdk_error(&e);
                tracing::error!(voice = %voice, error = %error, "Polly synthesis failed");
                error
            })?;

        let content_type = output.content_type().unwrap_or("audio/mpeg").to_owned();

        let audio = output
            .audio_stream
            .collect()
            .await
            .map_err(|e| TtsError::Provider(format!("Failed to read audio stream: {e}")))?
            .into_bytes()
            .to_vec();

        if audio.is_empty() {
            return Err(TtsError::Provider("Polly returned an empty audio stream".to_owned()));
        }

        Ok(SpeechResponse { audio, content_type })
    }

    fn name(&self) -> &'static str {
        "polly"
    }
}

/// Map an SDK failure to a provider error
///
/// Connection failures and SDK timeouts are transient; service errors are
/// classified by their error code.
fn classify_sdk_error<E, R>(e: &SdkError<E, R>) -> TtsError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(e).to_string();

    match e {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => TtsError::ServiceUnavailable(message),
        _ => TtsError::from_code(e.as_service_error().and_then(ProvideErrorMetadata::code), message),
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_polly::operation::synthesize_speech::SynthesizeSpeechError;

    use super::*;
    use crate::SynthesisFailure;

    type PollySdkError = SdkError<SynthesizeSpeechError, ()>;

    #[test]
    fn sdk_timeouts_are_service_unavailable() {
        let error = PollySdkError::timeout_error("operation timed out");

        let classified = classify_sdk_error(&error);

        assert!(matches!(classified, TtsError::ServiceUnavailable(_)));
        assert_eq!(classified.failure(), SynthesisFailure::ServiceUnavailable);
        assert!(classified.failure().is_retryable());
    }

    #[test]
    fn request_construction_failures_are_processing_errors() {
        let error = PollySdkError::construction_failure("missing voice id");

        let classified = classify_sdk_error(&error);

        assert_eq!(classified.failure(), SynthesisFailure::AudioProcessing);
        assert!(!classified.failure().is_retryable());
    }
}
