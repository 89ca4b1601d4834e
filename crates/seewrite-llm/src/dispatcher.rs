//! Ordered fallback across model backends

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use seewrite_config::InferenceConfig;
use serde_json::Value;

use crate::backend::BackendDescriptor;
use crate::error::LlmError;
use crate::provider::ModelInvoker;
use crate::types::{InferenceRequest, InferenceResult};

/// Returned when every backend failed or was skipped
pub const EXHAUSTED_MESSAGE: &str = "I apologize, but I'm unable to access the AI models right now. \
     Please ensure Bedrock model access is enabled in your AWS account.";

/// Tries backends in priority order until one returns text
///
/// The backend list is fixed at construction and never reordered, so the
/// same request always walks the same sequence.
#[derive(Clone)]
pub struct Dispatcher {
    backends: Arc<[BackendDescriptor]>,
    invoker: Arc<dyn ModelInvoker>,
    attempt_timeout: Option<Duration>,
}

impl Dispatcher {
    /// Create a dispatcher over `backends`, first entry most preferred
    ///
    /// # Errors
    ///
    /// Returns `LlmError::DuplicateBackend` if two backends share an id
    pub fn new(backends: Vec<BackendDescriptor>, invoker: Arc<dyn ModelInvoker>) -> Result<Self, LlmError> {
        let mut seen = HashSet::with_capacity(backends.len());
        if let Some(duplicate) = backends.iter().find(|b| !seen.insert(b.id())) {
            return Err(LlmError::DuplicateBackend(duplicate.id().to_owned()));
        }

        if backends.is_empty() {
            tracing::warn!("no inference backends configured, every dispatch will be exhausted");
        }

        Ok(Self {
            backends: backends.into(),
            invoker,
            attempt_timeout: None,
        })
    }

    /// Create a dispatcher from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the attempt timeout is invalid
    pub fn from_config(config: &InferenceConfig, invoker: Arc<dyn ModelInvoker>) -> Result<Self, LlmError> {
        let backends = config
            .resolved_backends()
            .into_iter()
            .map(|(id, family)| BackendDescriptor::new(id, family))
            .collect();

        let dispatcher = Self::new(backends, invoker)?;

        tracing::debug!(
            backends = dispatcher.backends.len(),
            "inference dispatcher initialized"
        );

        Ok(match config.attempt_timeout()? {
            Some(timeout) => dispatcher.with_attempt_timeout(timeout),
            None => dispatcher,
        })
    }

    /// Bound each backend call; an elapsed attempt counts as a failure
    #[must_use]
    pub const fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = Some(timeout);
        self
    }

    pub fn backends(&self) -> &[BackendDescriptor] {
        &self.backends
    }

    /// Run the request against each backend in order
    ///
    /// Backends that cannot take an attached image are skipped. A failed or
    /// timed-out call is logged and the next backend is tried. The first
    /// decodable response wins and later backends are never called.
    pub async fn dispatch(&self, request: &InferenceRequest) -> InferenceResult {
        let has_image = request.image().is_some();
        let mut attempts = 0_usize;

        for backend in self.backends.iter() {
            if has_image && !backend.accepts_images() {
                tracing::debug!(backend = backend.id(), "skipping backend without image support");
                continue;
            }

            attempts += 1;
            let start = Instant::now();

            match self.attempt(backend, request).await {
                Ok(raw) => {
                    let text = backend.decode(&raw);

                    tracing::info!(
                        backend = backend.id(),
                        attempts,
                        latency = ?start.elapsed(),
                        output_len = text.len(),
                        "inference succeeded"
                    );

                    return InferenceResult::Success {
                        text,
                        backend_id: backend.id().to_owned(),
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        backend = backend.id(),
                        error = %e,
                        retryable = e.is_retryable(),
                        latency = ?start.elapsed(),
                        "backend failed, trying next"
                    );
                }
            }
        }

        tracing::error!(attempts, has_image, "all inference backends exhausted");

        InferenceResult::Exhausted {
            fallback_text: EXHAUSTED_MESSAGE.to_owned(),
        }
    }

    async fn attempt(&self, backend: &BackendDescriptor, request: &InferenceRequest) -> Result<Value, LlmError> {
        let body = backend.encode(request);
        let call = self.invoker.invoke(backend.id(), &body);

        match self.attempt_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| LlmError::Timeout(limit))?,
            None => call.await,
        }
    }
}
