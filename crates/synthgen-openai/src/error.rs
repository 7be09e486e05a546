use reqwest::StatusCode;
use synthgen_core::error::GenerationError;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },
}

impl From<OpenAiError> for GenerationError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::Api { status, body } => GenerationError::Transport {
                status: status.as_u16(),
                body,
            },
            other => GenerationError::Backend(Box::new(other)),
        }
    }
}
