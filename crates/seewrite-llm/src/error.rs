use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while calling a model backend
#[derive(Debug, Error)]
pub enum LlmError {
    /// Account lacks access to the model, or the model id is unknown
    #[error("model access denied: {0}")]
    AccessDenied(String),

    /// Backend rejected the encoded request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Backend returned a transient or unclassified error
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Backend did not answer within the attempt timeout
    #[error("backend timed out after {0:?}")]
    Timeout(Duration),

    /// Two backends were configured with the same id
    #[error("duplicate backend id: {0}")]
    DuplicateBackend(String),

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl LlmError {
    /// Whether the same backend might succeed if asked again later
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Upstream(_) | Self::Timeout(_))
    }

    /// Map a provider error code to an error variant
    pub fn from_code(code: Option<&str>, message: String) -> Self {
        match code {
            Some("AccessDeniedException" | "ResourceNotFoundException") => Self::AccessDenied(message),
            Some("ValidationException") => Self::InvalidRequest(message),
            _ => Self::Upstream(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_problems_are_not_retryable() {
        let err = LlmError::from_code(Some("AccessDeniedException"), "no access".to_owned());
        assert!(matches!(err, LlmError::AccessDenied(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn throttling_is_retryable() {
        let err = LlmError::from_code(Some("ThrottlingException"), "slow down".to_owned());
        assert!(matches!(err, LlmError::Upstream(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn missing_code_is_upstream() {
        assert!(LlmError::from_code(None, "dispatch failure".to_owned()).is_retryable());
    }
}
