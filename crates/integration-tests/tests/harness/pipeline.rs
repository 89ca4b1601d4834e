//! Assembles a pipeline from scripted capabilities

use std::sync::Arc;
use std::time::Duration;

use seewrite_config::{InferenceConfig, SpeechConfig};
use seewrite_llm::{BackendDescriptor, Dispatcher};
use seewrite_pipeline::Pipeline;
use seewrite_vision::SignalExtractor;
use tts::SpeechSynthesizer;

use super::capabilities::{ScriptedInvoker, ScriptedLabels, ScriptedSpeech, ScriptedText};

/// Shared handles to the doubles behind a built pipeline
pub struct TestPipeline {
    pub pipeline: Pipeline,
    pub invoker: Arc<ScriptedInvoker>,
    pub speech: Arc<ScriptedSpeech>,
}

pub struct PipelineBuilder {
    labels: ScriptedLabels,
    text: ScriptedText,
    invoker: ScriptedInvoker,
    speech: ScriptedSpeech,
    backends: Option<Vec<BackendDescriptor>>,
    attempt_timeout: Option<Duration>,
    attach_image: bool,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            labels: ScriptedLabels::new(&[]),
            text: ScriptedText::new(""),
            invoker: ScriptedInvoker::new(),
            speech: ScriptedSpeech::new(),
            backends: None,
            attempt_timeout: None,
            attach_image: false,
        }
    }

    pub fn with_labels(mut self, labels: ScriptedLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_text(mut self, text: ScriptedText) -> Self {
        self.text = text;
        self
    }

    pub fn with_invoker(mut self, invoker: ScriptedInvoker) -> Self {
        self.invoker = invoker;
        self
    }

    pub fn with_speech(mut self, speech: ScriptedSpeech) -> Self {
        self.speech = speech;
        self
    }

    /// Replace the built-in backend order
    pub fn with_backends(mut self, backends: Vec<BackendDescriptor>) -> Self {
        self.backends = Some(backends);
        self
    }

    pub const fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = Some(timeout);
        self
    }

    pub const fn attach_image(mut self) -> Self {
        self.attach_image = true;
        self
    }

    pub fn build(self) -> TestPipeline {
        let invoker = Arc::new(self.invoker);
        let speech = Arc::new(self.speech);

        let dispatcher = match self.backends {
            Some(backends) => Dispatcher::new(backends, invoker.clone()).unwrap(),
            None => Dispatcher::from_config(&InferenceConfig::default(), invoker.clone()).unwrap(),
        };

        let dispatcher = match self.attempt_timeout {
            Some(timeout) => dispatcher.with_attempt_timeout(timeout),
            None => dispatcher,
        };

        let extractor = SignalExtractor::new(Arc::new(self.labels), Arc::new(self.text));
        let synthesizer = SpeechSynthesizer::new(speech.clone(), &SpeechConfig::default());

        let pipeline = Pipeline::new(extractor, dispatcher, synthesizer).with_attach_image(self.attach_image);

        TestPipeline {
            pipeline,
            invoker,
            speech,
        }
    }
}
