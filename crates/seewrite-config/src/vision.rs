use serde::Deserialize;

/// Image analysis configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisionConfig {
    /// Attach the raw image to the description request
    ///
    /// When set, only image-capable backends are tried for descriptions.
    #[serde(default)]
    pub attach_image: bool,
}
