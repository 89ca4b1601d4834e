use seewrite_core::ImagePayload;

/// A prompt for one dispatch, re-encoded per backend
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    prompt: String,
    image: Option<ImagePayload>,
    max_output_tokens: u32,
}

impl InferenceRequest {
    pub fn new(prompt: impl Into<String>, max_output_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
            max_output_tokens,
        }
    }

    /// Attach an image; only image-capable backends will be tried
    #[must_use]
    pub fn with_image(mut self, image: ImagePayload) -> Self {
        self.image = Some(image);
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub const fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    pub const fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }
}

/// Outcome of a dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceResult {
    /// A backend produced text
    Success { text: String, backend_id: String },
    /// Every backend failed or was skipped
    Exhausted { fallback_text: String },
}

impl InferenceResult {
    /// The generated or fallback text
    pub fn text(&self) -> &str {
        match self {
            Self::Success { text, .. } => text.as_str(),
            Self::Exhausted { fallback_text } => fallback_text.as_str(),
        }
    }

    pub fn backend_id(&self) -> Option<&str> {
        match self {
            Self::Success { backend_id, .. } => Some(backend_id.as_str()),
            Self::Exhausted { .. } => None,
        }
    }

    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}
