use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_rekognition::Client;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::Image;

use super::ObjectLabeler;
use crate::error::VisionError;
use crate::seed::{DetectedObject, MAX_LABELS, MIN_CONFIDENCE};

/// Object labeling backed by Amazon Rekognition `DetectLabels`
pub struct RekognitionLabeler {
    client: Client,
}

impl RekognitionLabeler {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ObjectLabeler for RekognitionLabeler {
    async fn detect_objects(&self, image: &[u8]) -> crate::error::Result<Vec<DetectedObject>> {
        tracing::debug!(image_len = image.len(), "rekognition detect_labels request");

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let output = self
            .client
            .detect_labels()
            .image(Image::builder().bytes(Blob::new(image)).build())
            .max_labels(MAX_LABELS as i32)
            .min_confidence(MIN_CONFIDENCE)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(error = %message, "rekognition detect_labels failed");
                VisionError::Labeling(message)
            })?;

        let objects: Vec<DetectedObject> = output
            .labels()
            .iter()
            .filter_map(|label| {
                let name = label.name()?;
                Some(DetectedObject::new(name, label.confidence().unwrap_or_default()))
            })
            .collect();

        tracing::debug!(labels = objects.len(), "rekognition detect_labels complete");

        Ok(objects)
    }

    fn name(&self) -> &str {
        "rekognition"
    }
}
