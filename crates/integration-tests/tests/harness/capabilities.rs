//! Scripted capability doubles for pipeline tests
//!
//! Each double returns canned results and records what it was asked, so
//! tests can assert both outputs and call order.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use seewrite_llm::{LlmError, ModelInvoker};
use seewrite_vision::{DetectedObject, ObjectLabeler, TextReader, VisionError};
use serde_json::Value;
use tts::{SpeechRequest, SpeechResponse, TtsError, TtsProvider};

/// Object labeler returning a fixed list, or failing
pub struct ScriptedLabels {
    objects: Option<Vec<DetectedObject>>,
}

impl ScriptedLabels {
    pub fn new(objects: &[(&str, f32)]) -> Self {
        Self {
            objects: Some(
                objects
                    .iter()
                    .map(|(name, confidence)| DetectedObject::new(*name, *confidence))
                    .collect(),
            ),
        }
    }

    pub const fn failing() -> Self {
        Self { objects: None }
    }
}

#[async_trait]
impl ObjectLabeler for ScriptedLabels {
    async fn detect_objects(&self, _image: &[u8]) -> seewrite_vision::Result<Vec<DetectedObject>> {
        self.objects
            .clone()
            .ok_or_else(|| VisionError::Labeling("labeling offline".to_owned()))
    }

    fn name(&self) -> &'static str {
        "scripted-labels"
    }
}

/// Text reader returning fixed text, or failing
pub struct ScriptedText {
    text: Option<String>,
}

impl ScriptedText {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_owned()),
        }
    }

    pub const fn failing() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl TextReader for ScriptedText {
    async fn read_text(&self, _image: &[u8]) -> seewrite_vision::Result<String> {
        self.text
            .clone()
            .ok_or_else(|| VisionError::TextExtraction("text extraction offline".to_owned()))
    }

    fn name(&self) -> &'static str {
        "scripted-text"
    }
}

/// Model invoker with per-model canned bodies; unscripted models fail
#[derive(Default)]
pub struct ScriptedInvoker {
    replies: HashMap<String, Value>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `model_id` with `body`
    pub fn reply(mut self, model_id: &str, body: Value) -> Self {
        self.replies.insert(model_id.to_owned(), body);
        self
    }

    /// Delay every call to `model_id` by `delay`
    pub fn delay(mut self, model_id: &str, delay: Duration) -> Self {
        self.delays.insert(model_id.to_owned(), delay);
        self
    }

    /// Model ids invoked, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(id, _)| id.clone()).collect()
    }

    /// Encoded body sent to `model_id` on its first call
    pub fn body_for(&self, model_id: &str) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| id == model_id)
            .map(|(_, body)| body.clone())
    }
}

#[async_trait]
impl ModelInvoker for ScriptedInvoker {
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Value, LlmError> {
        self.calls.lock().unwrap().push((model_id.to_owned(), body.clone()));

        if let Some(delay) = self.delays.get(model_id) {
            tokio::time::sleep(*delay).await;
        }

        self.replies
            .get(model_id)
            .cloned()
            .ok_or_else(|| LlmError::AccessDenied(format!("no access to {model_id}")))
    }
}

/// Speech provider returning fixed audio, or a provider error code
#[derive(Default)]
pub struct ScriptedSpeech {
    error_code: Option<&'static str>,
    requests: Mutex<Vec<SpeechRequest>>,
}

impl ScriptedSpeech {
    pub const AUDIO: &'static [u8] = b"ID3scripted-mp3";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(code: &'static str) -> Self {
        Self {
            error_code: Some(code),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TtsProvider for ScriptedSpeech {
    async fn synthesize(&self, request: SpeechRequest) -> tts::Result<SpeechResponse> {
        self.requests.lock().unwrap().push(request);

        match self.error_code {
            Some(code) => Err(TtsError::from_code(Some(code), format!("{code} raised"))),
            None => Ok(SpeechResponse {
                audio: Self::AUDIO.to_vec(),
                content_type: "audio/mpeg".to_owned(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "scripted-speech"
    }
}
