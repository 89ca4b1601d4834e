use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_textract::Client;
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::primitives::Blob;
use aws_sdk_textract::types::{BlockType, Document};

use super::TextReader;
use crate::error::VisionError;

/// Line text extraction backed by Amazon Textract `DetectDocumentText`
pub struct TextractReader {
    client: Client,
}

impl TextractReader {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl TextReader for TextractReader {
    async fn read_text(&self, image: &[u8]) -> crate::error::Result<String> {
        tracing::debug!(image_len = image.len(), "textract detect_document_text request");

        let output = self
            .client
            .detect_document_text()
            .document(Document::builder().bytes(Blob::new(image)).build())
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(error = %message, "textract detect_document_text failed");
                VisionError::TextExtraction(message)
            })?;

        let lines: Vec<&str> = output
            .blocks()
            .iter()
            .filter(|block| block.block_type() == Some(&BlockType::Line))
            .filter_map(|block| block.text())
            .collect();

        tracing::debug!(lines = lines.len(), "textract detect_document_text complete");

        Ok(lines.join(" "))
    }

    fn name(&self) -> &str {
        "textract"
    }
}
