use std::sync::Arc;

use seewrite_config::Config;
use seewrite_core::ImagePayload;
use seewrite_llm::{BedrockInvoker, Dispatcher, InferenceRequest, InferenceResult};
use seewrite_vision::{
    SignalExtractor,
    provider::{rekognition::RekognitionLabeler, textract::TextractReader},
};
use serde::Serialize;
use tts::{PollyProvider, SpeechSynthesizer, SynthesisResult};

use crate::{
    error::PipelineError,
    prompt,
    request::{
        AnswerResponse, AudioResponse, DescribeImageRequest, DescriptionResponse, FollowUpRequest, SpeechRequest,
    },
};

/// Text plus the audio that speaks it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narration {
    pub text: String,
    pub audio: AudioResponse,
}

/// Stateless composition of extraction, dispatch and synthesis
///
/// Safe to share between concurrent invocations; nothing is cached.
pub struct Pipeline {
    extractor: SignalExtractor,
    dispatcher: Dispatcher,
    synthesizer: SpeechSynthesizer,
    attach_image: bool,
}

impl Pipeline {
    pub const fn new(extractor: SignalExtractor, dispatcher: Dispatcher, synthesizer: SpeechSynthesizer) -> Self {
        Self {
            extractor,
            dispatcher,
            synthesizer,
            attach_image: false,
        }
    }

    /// Also send the raw image to image-capable backends
    #[must_use]
    pub const fn with_attach_image(mut self, attach_image: bool) -> Self {
        self.attach_image = attach_image;
        self
    }

    /// Wire the AWS-backed capabilities from configuration
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let sdk_config = crate::aws::sdk_config(&config.aws).await;

        let extractor = SignalExtractor::new(
            Arc::new(RekognitionLabeler::new(&sdk_config)),
            Arc::new(TextractReader::new(&sdk_config)),
        );

        let dispatcher = Dispatcher::from_config(&config.inference, Arc::new(BedrockInvoker::new(&sdk_config)))
            .map_err(|e| anyhow::anyhow!("Failed to initialize inference dispatcher: {e}"))?;

        let synthesizer = SpeechSynthesizer::new(Arc::new(PollyProvider::new(&sdk_config)), &config.speech);

        tracing::info!(
            region = %config.aws.region,
            backends = dispatcher.backends().len(),
            attach_image = config.vision.attach_image,
            "content pipeline ready"
        );

        Ok(Self::new(extractor, dispatcher, synthesizer).with_attach_image(config.vision.attach_image))
    }

    /// Describe an image for audio delivery; never fails
    pub async fn describe_image(&self, image: &ImagePayload) -> String {
        let extraction = self.extractor.extract(image).await;

        let mut request = InferenceRequest::new(prompt::description(&extraction.summary), prompt::DESCRIPTION_MAX_TOKENS);

        if self.attach_image {
            request = request.with_image(image.clone());
        }

        match self.dispatcher.dispatch(&request).await {
            InferenceResult::Success { text, backend_id } => {
                tracing::debug!(backend = %backend_id, degraded_seed = extraction.degraded, "description generated");
                text
            }
            InferenceResult::Exhausted { .. } => {
                tracing::warn!("no backend produced a description, using fallback");
                prompt::DEGRADED_DESCRIPTION.to_owned()
            }
        }
    }

    /// Answer a question in the context of an earlier description; never fails
    pub async fn answer_follow_up(&self, original_description: &str, question: &str) -> String {
        let request = InferenceRequest::new(
            prompt::follow_up(original_description, question),
            prompt::FOLLOW_UP_MAX_TOKENS,
        );

        match self.dispatcher.dispatch(&request).await {
            InferenceResult::Success { text, backend_id } => {
                tracing::debug!(backend = %backend_id, "follow-up answered");
                text
            }
            InferenceResult::Exhausted { .. } => {
                tracing::warn!(question_len = question.len(), "no backend answered, using fallback");
                prompt::follow_up_fallback(question)
            }
        }
    }

    /// Synthesize speech directly; failures are reported, not raised
    pub async fn synthesize(&self, text: &str, voice: Option<&str>) -> SynthesisResult {
        self.synthesizer.synthesize(text, voice).await
    }

    pub async fn describe_and_narrate(
        &self,
        image: &ImagePayload,
        voice: Option<&str>,
    ) -> Result<Narration, PipelineError> {
        let text = self.describe_image(image).await;
        self.narrate(text, voice).await
    }

    pub async fn answer_and_narrate(
        &self,
        original_description: &str,
        question: &str,
        voice: Option<&str>,
    ) -> Result<Narration, PipelineError> {
        let text = self.answer_follow_up(original_description, question).await;
        self.narrate(text, voice).await
    }

    async fn narrate(&self, text: String, voice: Option<&str>) -> Result<Narration, PipelineError> {
        let audio = self.synthesizer.synthesize(&text, voice).await.into_result()?;

        Ok(Narration {
            text,
            audio: audio.into(),
        })
    }

    /// Validate and run a describe request
    pub async fn handle_describe(&self, request: &DescribeImageRequest) -> Result<DescriptionResponse, PipelineError> {
        let image = request.image()?;

        tracing::debug!(image_bytes = image.len(), "describe request accepted");

        Ok(DescriptionResponse {
            description: self.describe_image(&image).await,
        })
    }

    /// Validate and run a follow-up request
    pub async fn handle_follow_up(&self, request: &FollowUpRequest) -> Result<AnswerResponse, PipelineError> {
        request.validate()?;

        Ok(AnswerResponse {
            answer: self
                .answer_follow_up(&request.original_description, &request.question)
                .await,
        })
    }

    /// Validate and run a speech request
    pub async fn handle_speech(&self, request: &SpeechRequest) -> Result<AudioResponse, PipelineError> {
        request.validate()?;

        let audio = self
            .synthesize(&request.text, Some(&request.voice_id))
            .await
            .into_result()?;

        Ok(audio.into())
    }

    /// Validate and run a narrated describe request
    pub async fn handle_describe_narrated(
        &self,
        request: &DescribeImageRequest,
        voice: Option<&str>,
    ) -> Result<Narration, PipelineError> {
        let image = request.image()?;
        self.describe_and_narrate(&image, voice).await
    }

    /// Validate and run a narrated follow-up request
    pub async fn handle_follow_up_narrated(
        &self,
        request: &FollowUpRequest,
        voice: Option<&str>,
    ) -> Result<Narration, PipelineError> {
        request.validate()?;

        self.answer_and_narrate(&request.original_description, &request.question, voice)
            .await
    }
}
