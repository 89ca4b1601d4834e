//! Visual signal extraction
//!
//! Turns an image into a short, model-free seed description from detected
//! object labels and recognized line text.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod extractor;
pub mod provider;
mod seed;

pub use error::{Result, VisionError};
pub use extractor::{DEGRADED_SUMMARY, Extraction, SignalExtractor};
pub use provider::{ObjectLabeler, TextReader};
pub use seed::{
    DetectedObject, EMPTY_SEED_DESCRIPTION, MAX_LABELS, MAX_TEXT_CHARS, MIN_CONFIDENCE, SUMMARY_LABELS,
    VisualSignalSeed,
};
