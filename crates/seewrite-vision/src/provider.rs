pub mod rekognition;
pub mod textract;

use async_trait::async_trait;

use crate::seed::DetectedObject;

/// Labels objects in an image
#[async_trait]
pub trait ObjectLabeler: Send + Sync {
    /// Detect labeled objects in detector order; ranking is left to the seed
    async fn detect_objects(&self, image: &[u8]) -> crate::error::Result<Vec<DetectedObject>>;

    /// Get the capability name
    fn name(&self) -> &str;
}

/// Reads printed line text from an image
#[async_trait]
pub trait TextReader: Send + Sync {
    /// Recognized lines joined by single spaces
    async fn read_text(&self, image: &[u8]) -> crate::error::Result<String>;

    /// Get the capability name
    fn name(&self) -> &str;
}
