use thiserror::Error;

pub type Result<T, E = VisionError> = std::result::Result<T, E>;

/// Errors raised by the vision capabilities
///
/// Never escapes [`crate::SignalExtractor::extract`], which degrades instead.
#[derive(Debug, Error)]
pub enum VisionError {
    /// Object labeling call failed
    #[error("object labeling failed: {0}")]
    Labeling(String),

    /// Line text extraction call failed
    #[error("text extraction failed: {0}")]
    TextExtraction(String),
}
