#![allow(clippy::must_use_candidate)]

pub mod aws;
mod env;
pub mod inference;
mod loader;
pub mod speech;
pub mod telemetry;
pub mod vision;

use serde::Deserialize;

pub use aws::*;
pub use inference::*;
pub use speech::*;
pub use telemetry::{ExportProtocol, ExporterConfig, LogFormat, TelemetryConfig};
pub use vision::*;

/// Top-level `SeeWrite` configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Shared AWS client settings
    #[serde(default)]
    pub aws: AwsConfig,
    /// Model backends and dispatch settings
    #[serde(default)]
    pub inference: InferenceConfig,
    /// Image analysis settings
    #[serde(default)]
    pub vision: VisionConfig,
    /// Speech synthesis settings
    #[serde(default)]
    pub speech: SpeechConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
