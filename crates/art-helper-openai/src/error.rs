use art_helper_core::error::ArtHelperError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn't serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("API format error: {0}")]
    Format(String),

    #[error("first choice carries no content")]
    EmptyContent,
}

/// Collapse provider-local causes into the shared taxonomy: an empty reply
/// keeps its dedicated category, everything else becomes a request failure
/// wrapping the cause text.
impl From<OpenAiError> for ArtHelperError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::EmptyContent => ArtHelperError::EmptyResponse,
            other => ArtHelperError::Request(other.to_string()),
        }
    }
}
