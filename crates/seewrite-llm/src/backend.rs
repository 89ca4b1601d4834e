use seewrite_config::ModelFamily;
use serde_json::Value;

use crate::protocol::{self, ResponseShape};
use crate::types::InferenceRequest;

/// One model backend: an id plus the family that fixes its wire format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDescriptor {
    id: String,
    family: ModelFamily,
    shape: ResponseShape,
}

impl BackendDescriptor {
    pub fn new(id: impl Into<String>, family: ModelFamily) -> Self {
        Self {
            id: id.into(),
            family,
            shape: ResponseShape::for_family(family),
        }
    }

    /// Build a descriptor whose family is inferred from the model id
    pub fn inferred(id: impl Into<String>) -> Self {
        let id = id.into();
        let family = ModelFamily::infer(&id);
        Self::new(id, family)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn family(&self) -> ModelFamily {
        self.family
    }

    pub const fn accepts_images(&self) -> bool {
        protocol::accepts_images(self.family)
    }

    /// Encode the request in this backend's schema
    pub fn encode(&self, request: &InferenceRequest) -> Value {
        protocol::encode(self.family, request)
    }

    /// Decode a successful response into text
    ///
    /// A body that does not match this backend's shape is stringified
    /// rather than treated as a failure.
    pub fn decode(&self, raw: &Value) -> String {
        if let Some(text) = self.shape.extract(raw) {
            return text;
        }

        tracing::info!(
            backend = %self.id,
            shape = ?self.shape,
            "unrecognized response shape, returning raw body"
        );

        match raw {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decoder_follows_family() {
        let llama = BackendDescriptor::inferred("meta.llama3-8b-instruct-v1:0");
        assert_eq!(llama.decode(&json!({"generation": "Plants make food."})), "Plants make food.");

        let claude = BackendDescriptor::inferred("anthropic.claude-3-haiku-20240307-v1:0");
        let body = json!({"content": [{"type": "text", "text": "The heart is a pump..."}]});
        assert_eq!(claude.decode(&body), "The heart is a pump...");
    }

    #[test]
    fn unknown_shape_is_stringified() {
        let llama = BackendDescriptor::inferred("meta.llama3-8b-instruct-v1:0");
        let body = json!({"result": "odd"});

        assert_eq!(llama.decode(&body), r#"{"result":"odd"}"#);
    }

    #[test]
    fn non_json_body_is_passed_through() {
        let titan = BackendDescriptor::inferred("amazon.titan-text-lite-v1");
        assert_eq!(titan.decode(&Value::String("plain words".to_owned())), "plain words");
    }

    #[test]
    fn explicit_family_overrides_prefix() {
        let backend = BackendDescriptor::new("us.anthropic.claude-3-5-sonnet-20240620-v1:0", ModelFamily::AnthropicMessages);
        assert!(backend.accepts_images());
        assert!(!BackendDescriptor::inferred("us.anthropic.claude-3-5-sonnet-20240620-v1:0").accepts_images());
    }
}
