use std::time::Duration;
use thiserror::Error;

/// Failures of the external completion capability.
///
/// None of these reach the end caller: the adapter logs them and answers
/// from the deterministic engine instead.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("External AI capability is not configured")]
    Unavailable,

    #[error("Completion request failed: {0}")]
    Request(String),

    #[error("Completion endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Completion timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Profile {0} not found")]
    ProfileNotFound(String),

    #[error("Event {0} not found")]
    EventNotFound(String),
}

/// Why an operation answered from the deterministic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No completion provider configured.
    Unavailable,
    /// Provider configured but the call or the parse failed.
    Errored,
}

impl FallbackReason {
    pub fn classify(error: &AdapterError) -> Self {
        match error {
            AdapterError::Unavailable => FallbackReason::Unavailable,
            _ => FallbackReason::Errored,
        }
    }
}
