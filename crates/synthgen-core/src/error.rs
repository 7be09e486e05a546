//! Unified error type exposed by **`synthgen-core`**.
//!
//! Backend crates should convert their internal errors into one of these
//! variants before bubbling them up to the [`crate::GenerationService`].
//! This keeps the public API small while still conveying rich diagnostic
//! information — callers can distinguish "my input was invalid" from "the
//! remote model misbehaved" from "no such dataset" without string matching.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GenerationError>;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// Caller-supplied topic or counts failed basic validation.  Raised
    /// before any network call is made, never retried.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The completion endpoint answered with a non-success status.  Carries
    /// the upstream status code and diagnostic body verbatim.
    #[error("completion endpoint returned status {status}: {body}")]
    Transport { status: u16, body: String },

    /// The outer response envelope was not parseable as JSON at all — the
    /// remote service did not return structured data.
    #[error("response envelope is not valid JSON: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    /// The envelope parsed but contained no candidate answer: the choice
    /// list was absent or empty, or the nested message content was missing.
    #[error("response envelope contains no candidate content")]
    EmptyCompletion,

    /// The candidate content, after fence-stripping, is not valid JSON.
    /// Carries the cleaned text so callers can diagnose exactly what the
    /// model produced.
    #[error("model produced malformed JSON payload: {content}")]
    MalformedPayload {
        content: String,
        #[source]
        source: serde_json::Error,
    },

    /// A read referenced a topic with no stored dataset.
    #[error("no dataset found for topic `{0}`")]
    NotFound(String),

    /// Generic forwarding of any backend-specific error that doesn’t fit
    /// another category (e.g. a connect timeout before any status arrived).
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}
