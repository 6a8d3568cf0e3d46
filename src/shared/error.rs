use crate::release_notes::domain::DocumentKind;
use thiserror::Error;

/// Errors raised while navigating the release-notes graph.
///
/// A resource that legitimately does not exist is never an error at the
/// fetcher or link-follower layer; those layers report it as `Ok(None)`.
/// `NotFound` only appears once a navigator or summary escalates a missing
/// primary document.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Resource not found: {resource}\n\n💡 Hint: Check that the version or year exists in the release index")]
    NotFound { resource: String },

    #[error("Request to {url} failed: {source}\n\n💡 Hint: Please check your internet connection")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned status code {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode {url} as {kind}: {source}")]
    Decode {
        url: String,
        kind: DocumentKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Document at {url} was requested as {expected} but resolved to {actual}")]
    KindMismatch {
        url: String,
        expected: DocumentKind,
        actual: DocumentKind,
    },

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Invalid document data: {details}")]
    InvalidData { details: String },

    #[error("Operation was cancelled")]
    Cancelled,
}

impl GraphError {
    pub(crate) fn not_found(resource: impl Into<String>) -> Self {
        GraphError::NotFound {
            resource: resource.into(),
        }
    }

    /// True when the error is an escalated absence rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NotFound { .. })
    }
}
