use std::time::Duration;

use indexmap::IndexMap;
use serde::Deserialize;

/// Model ids tried, in order, when no backends are configured
pub const DEFAULT_BACKENDS: &[&str] = &[
    "meta.llama3-8b-instruct-v1:0",
    "meta.llama3-70b-instruct-v1:0",
    "mistral.mistral-7b-instruct-v0:2",
    "mistral.mixtral-8x7b-instruct-v0:1",
    "cohere.command-text-v14",
    "cohere.command-r-v1:0",
    "anthropic.claude-3-haiku-20240307-v1:0",
    "anthropic.claude-v2:1",
    "anthropic.claude-v2",
];

/// Top-level inference configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InferenceConfig {
    /// Per-backend call timeout (e.g. "30s"); an elapsed timeout counts as a failed attempt
    #[serde(default)]
    pub attempt_timeout: Option<String>,
    /// Backends keyed by model id, tried in declaration order
    #[serde(default)]
    pub backends: IndexMap<String, BackendConfig>,
}

impl InferenceConfig {
    /// Parsed attempt timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the configured duration cannot be parsed
    pub fn attempt_timeout(&self) -> anyhow::Result<Option<Duration>> {
        self.attempt_timeout
            .as_deref()
            .map(|s| duration_str::parse(s).map_err(|e| anyhow::anyhow!("invalid attempt_timeout '{s}': {e}")))
            .transpose()
    }

    /// Ordered `(model id, family)` pairs, falling back to [`DEFAULT_BACKENDS`]
    ///
    /// A family not set explicitly is inferred from the model id.
    pub fn resolved_backends(&self) -> Vec<(String, ModelFamily)> {
        if self.backends.is_empty() {
            return DEFAULT_BACKENDS
                .iter()
                .map(|id| ((*id).to_owned(), ModelFamily::infer(id)))
                .collect();
        }

        self.backends
            .iter()
            .map(|(id, backend)| (id.clone(), backend.family.unwrap_or_else(|| ModelFamily::infer(id))))
            .collect()
    }
}

/// Configuration for a single model backend
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Request/response schema family, inferred from the model id when absent
    #[serde(default)]
    pub family: Option<ModelFamily>,
}

/// Request/response schema families for hosted models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    /// Anthropic Messages API (Claude 3 and later), accepts images
    AnthropicMessages,
    /// Anthropic legacy text completions
    AnthropicText,
    /// Meta Llama
    Llama,
    /// Mistral and Mixtral
    Mistral,
    /// Cohere Command text generation
    Cohere,
    /// Cohere Command R chat
    CohereChat,
    /// Anything else: flat prompt in, `text` out
    Generic,
}

impl ModelFamily {
    /// Infer the family from a model id prefix
    ///
    /// Cross-region inference profile prefixes (`us.`, `eu.`, ...) are
    /// ignored. Claude ids are Messages models unless they are legacy
    /// `v1`/`v2`/`instant` ids.
    pub fn infer(model_id: &str) -> Self {
        let model_id = strip_region_prefix(model_id);

        if let Some(claude) = model_id.strip_prefix("anthropic.claude-") {
            if LEGACY_CLAUDE_PREFIXES.iter().any(|prefix| claude.starts_with(prefix)) {
                Self::AnthropicText
            } else {
                Self::AnthropicMessages
            }
        } else if model_id.starts_with("meta.llama") {
            Self::Llama
        } else if model_id.starts_with("mistral") {
            Self::Mistral
        } else if model_id.starts_with("cohere.command-r") {
            Self::CohereChat
        } else if model_id.starts_with("cohere") {
            Self::Cohere
        } else {
            Self::Generic
        }
    }
}

/// Claude ids served only by the text completions API
const LEGACY_CLAUDE_PREFIXES: &[&str] = &["v1", "v2", "instant"];

/// Geography prefixes of cross-region inference profiles
const REGION_PREFIXES: &[&str] = &["us", "us-gov", "eu", "apac", "jp", "au", "ca", "global"];

fn strip_region_prefix(model_id: &str) -> &str {
    match model_id.split_once('.') {
        Some((prefix, rest)) if REGION_PREFIXES.contains(&prefix) => rest,
        _ => model_id,
    }
}
