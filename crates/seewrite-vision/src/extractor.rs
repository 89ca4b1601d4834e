use std::sync::Arc;

use seewrite_core::ImagePayload;

use crate::provider::{ObjectLabeler, TextReader};
use crate::seed::VisualSignalSeed;

/// Seed summary used when neither capability produced a result
pub const DEGRADED_SUMMARY: &str = "Unable to process the uploaded image.";

/// Outcome of analyzing one image
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Filtered visual signals
    pub seed: VisualSignalSeed,
    /// Seed folded into a sentence, or [`DEGRADED_SUMMARY`]
    pub summary: String,
    /// Both capabilities failed
    pub degraded: bool,
}

/// Runs object labeling and text extraction and folds the results into a seed
///
/// Each capability may fail on its own; the other's result is still used.
#[derive(Clone)]
pub struct SignalExtractor {
    labeler: Arc<dyn ObjectLabeler>,
    reader: Arc<dyn TextReader>,
}

impl SignalExtractor {
    pub fn new(labeler: Arc<dyn ObjectLabeler>, reader: Arc<dyn TextReader>) -> Self {
        Self { labeler, reader }
    }

    /// Analyze an image; never fails
    pub async fn extract(&self, image: &ImagePayload) -> Extraction {
        let objects = match self.labeler.detect_objects(image.bytes()).await {
            Ok(objects) => Some(objects),
            Err(e) => {
                tracing::warn!(capability = self.labeler.name(), error = %e, "object labeling unavailable");
                None
            }
        };

        let text = match self.reader.read_text(image.bytes()).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(capability = self.reader.name(), error = %e, "text extraction unavailable");
                None
            }
        };

        if objects.is_none() && text.is_none() {
            tracing::error!("all vision capabilities failed, using degraded summary");

            return Extraction {
                seed: VisualSignalSeed::default(),
                summary: DEGRADED_SUMMARY.to_owned(),
                degraded: true,
            };
        }

        let seed = VisualSignalSeed::new(objects.unwrap_or_default(), text.as_deref().unwrap_or_default());

        tracing::debug!(
            objects = seed.objects().len(),
            text_len = seed.extracted_text().len(),
            "visual signals extracted"
        );

        Extraction {
            summary: seed.describe(),
            seed,
            degraded: false,
        }
    }
}
