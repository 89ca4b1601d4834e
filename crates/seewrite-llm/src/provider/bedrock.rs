//! AWS Bedrock transport using the `InvokeModel` API

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::Value;

use super::ModelInvoker;
use crate::error::LlmError;

/// Invokes Bedrock-hosted models with raw JSON bodies
pub struct BedrockInvoker {
    client: BedrockClient,
}

impl BedrockInvoker {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: BedrockClient::new(config),
        }
    }
}

#[async_trait]
impl ModelInvoker for BedrockInvoker {
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Value, LlmError> {
        let payload = serde_json::to_vec(body).map_err(|e| LlmError::Internal(e.into()))?;

        tracing::debug!(model = model_id, body_len = payload.len(), "bedrock invoke_model request");

        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| {
                let code = e.as_service_error().and_then(ProvideErrorMetadata::code).map(str::to_owned);
                LlmError::from_code(code.as_deref(), DisplayErrorContext(&e).to_string())
            })?;

        let bytes = output.body().as_ref();

        tracing::debug!(model = model_id, response_len = bytes.len(), "bedrock invoke_model complete");

        Ok(serde_json::from_slice(bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned())))
    }
}
