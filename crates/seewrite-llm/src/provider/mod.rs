//! Transport for model invocations

pub mod bedrock;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::LlmError;

/// Sends an encoded body to a model and returns its raw response body
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Invoke `model_id` with a family-specific JSON body
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Value, LlmError>;
}
