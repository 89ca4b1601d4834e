//! Per-family request bodies and response shapes
//!
//! Every family has exactly one encoder and one response shape, chosen when
//! the backend is configured rather than by inspecting responses.

use seewrite_config::ModelFamily;
use serde_json::{Value, json};

use crate::types::InferenceRequest;

const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
const TEMPERATURE: f64 = 0.5;
const TOP_P: f64 = 0.9;
const DEFAULT_IMAGE_MEDIA_TYPE: &str = "image/jpeg";

/// Where a family puts the generated text in its response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{"content": [{"type": "text", "text": ...}]}`
    ContentBlocks,
    /// `{"completion": ...}`
    Completion,
    /// `{"generation": ...}`
    Generation,
    /// `{"generations": [{"text": ...}]}`
    Generations,
    /// `{"outputs": [{"text": ...}]}`
    Outputs,
    /// `{"text": ...}`
    Text,
}

impl ResponseShape {
    /// The shape produced by a model family
    pub const fn for_family(family: ModelFamily) -> Self {
        match family {
            ModelFamily::AnthropicMessages => Self::ContentBlocks,
            ModelFamily::AnthropicText => Self::Completion,
            ModelFamily::Llama => Self::Generation,
            ModelFamily::Mistral => Self::Outputs,
            ModelFamily::Cohere => Self::Generations,
            ModelFamily::CohereChat | ModelFamily::Generic => Self::Text,
        }
    }

    /// Pull the text out of a body of this shape
    ///
    /// Returns `None` when the body does not have the expected layout.
    pub fn extract(self, body: &Value) -> Option<String> {
        let text = match self {
            Self::ContentBlocks => first_text(body.get("content")?)?,
            Self::Completion => body.get("completion")?.as_str()?,
            Self::Generation => body.get("generation")?.as_str()?,
            Self::Generations => first_text(body.get("generations")?)?,
            Self::Outputs => first_text(body.get("outputs")?)?,
            Self::Text => body.get("text")?.as_str()?,
        };

        Some(text.to_owned())
    }
}

fn first_text(list: &Value) -> Option<&str> {
    list.as_array()?.first()?.get("text")?.as_str()
}

/// Whether the family accepts image attachments
pub const fn accepts_images(family: ModelFamily) -> bool {
    matches!(family, ModelFamily::AnthropicMessages)
}

/// Build the JSON request body for a family
pub fn encode(family: ModelFamily, request: &InferenceRequest) -> Value {
    let prompt = request.prompt();
    let max_tokens = request.max_output_tokens();

    match family {
        ModelFamily::AnthropicMessages => json!({
            "anthropic_version": ANTHROPIC_VERSION,
            "max_tokens": max_tokens,
            "messages": [{ "role": "user", "content": anthropic_content(request) }],
        }),
        ModelFamily::AnthropicText => json!({
            "prompt": format!("\n\nHuman: {prompt}\n\nAssistant:"),
            "max_tokens_to_sample": max_tokens,
            "temperature": TEMPERATURE,
            "stop_sequences": ["\n\nHuman:"],
        }),
        ModelFamily::Llama => json!({
            "prompt": prompt,
            "max_gen_len": max_tokens,
            "temperature": TEMPERATURE,
            "top_p": TOP_P,
        }),
        ModelFamily::Mistral => json!({
            "prompt": prompt,
            "max_tokens": max_tokens,
            "temperature": TEMPERATURE,
            "top_p": TOP_P,
        }),
        ModelFamily::Cohere => json!({
            "prompt": prompt,
            "max_tokens": max_tokens,
            "temperature": TEMPERATURE,
            "return_likelihoods": "NONE",
        }),
        ModelFamily::CohereChat => json!({
            "message": prompt,
            "max_tokens": max_tokens,
            "temperature": TEMPERATURE,
        }),
        ModelFamily::Generic => json!({
            "prompt": prompt,
            "max_tokens": max_tokens,
            "temperature": TEMPERATURE,
        }),
    }
}

/// Plain string content, or an image block followed by a text block
fn anthropic_content(request: &InferenceRequest) -> Value {
    let Some(image) = request.image() else {
        return Value::String(request.prompt().to_owned());
    };

    json!([
        {
            "type": "image",
            "source": {
                "type": "base64",
                "media_type": image.media_type().unwrap_or(DEFAULT_IMAGE_MEDIA_TYPE),
                "data": image.to_base64(),
            },
        },
        { "type": "text", "text": request.prompt() },
    ])
}

#[cfg(test)]
mod tests {
    use seewrite_core::ImagePayload;

    use super::*;

    fn request() -> InferenceRequest {
        InferenceRequest::new("Describe the water cycle", 800)
    }

    #[test]
    fn anthropic_messages_text_only() {
        let body = encode(ModelFamily::AnthropicMessages, &request());

        assert_eq!(body["anthropic_version"], "bedrock-2023-05-31");
        assert_eq!(body["max_tokens"], 800);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Describe the water cycle");
    }

    #[test]
    fn anthropic_messages_with_image() {
        let image = ImagePayload::from_base64("data:image/png;base64,aGVhcnQ=").unwrap();
        let body = encode(ModelFamily::AnthropicMessages, &request().with_image(image));
        let content = &body["messages"][0]["content"];

        assert_eq!(content[0]["type"], "image");
        assert_eq!(content[0]["source"]["media_type"], "image/png");
        assert_eq!(content[0]["source"]["data"], "aGVhcnQ=");
        assert_eq!(content[1]["text"], "Describe the water cycle");
    }

    #[test]
    fn anthropic_text_wraps_prompt_in_turns() {
        let body = encode(ModelFamily::AnthropicText, &request());

        assert_eq!(body["prompt"], "\n\nHuman: Describe the water cycle\n\nAssistant:");
        assert_eq!(body["max_tokens_to_sample"], 800);
        assert_eq!(body["stop_sequences"][0], "\n\nHuman:");
    }

    #[test]
    fn flat_prompt_families() {
        let llama = encode(ModelFamily::Llama, &request());
        assert_eq!(llama["max_gen_len"], 800);
        assert_eq!(llama["top_p"], 0.9);

        let mistral = encode(ModelFamily::Mistral, &request());
        assert_eq!(mistral["max_tokens"], 800);

        let cohere = encode(ModelFamily::Cohere, &request());
        assert_eq!(cohere["return_likelihoods"], "NONE");

        let chat = encode(ModelFamily::CohereChat, &request());
        assert_eq!(chat["message"], "Describe the water cycle");
        assert!(chat.get("prompt").is_none());
    }

    #[test]
    fn only_anthropic_messages_accepts_images() {
        assert!(accepts_images(ModelFamily::AnthropicMessages));
        assert!(!accepts_images(ModelFamily::AnthropicText));
        assert!(!accepts_images(ModelFamily::Llama));
        assert!(!accepts_images(ModelFamily::Generic));
    }

    #[test]
    fn shapes_extract_their_field() {
        let cases = [
            (ResponseShape::ContentBlocks, json!({"content": [{"type": "text", "text": "a"}]})),
            (ResponseShape::Completion, json!({"completion": "a"})),
            (ResponseShape::Generation, json!({"generation": "a", "stop_reason": "stop"})),
            (ResponseShape::Generations, json!({"generations": [{"text": "a"}]})),
            (ResponseShape::Outputs, json!({"outputs": [{"text": "a", "stop_reason": "stop"}]})),
            (ResponseShape::Text, json!({"text": "a"})),
        ];

        for (shape, body) in cases {
            assert_eq!(shape.extract(&body).as_deref(), Some("a"), "{shape:?}");
        }
    }

    #[test]
    fn shape_mismatch_is_none() {
        let body = json!({"generation": "a"});
        assert_eq!(ResponseShape::ContentBlocks.extract(&body), None);
        assert_eq!(ResponseShape::Generations.extract(&json!({"generations": []})), None);
    }
}
