//! Multi-backend inference dispatch
//!
//! Tries an ordered list of hosted model backends, each with its own
//! request and response schema, and returns the first usable text. Backend
//! failures never escape the dispatcher; exhausting the list yields a fixed
//! apology instead.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod backend;
pub mod dispatcher;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod types;

pub use backend::BackendDescriptor;
pub use dispatcher::{Dispatcher, EXHAUSTED_MESSAGE};
pub use error::LlmError;
pub use protocol::ResponseShape;
pub use provider::ModelInvoker;
pub use provider::bedrock::BedrockInvoker;
pub use seewrite_config::ModelFamily;
pub use types::{InferenceRequest, InferenceResult};
