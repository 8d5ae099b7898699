//! Unified error type exposed by **`art-helper-core`**.
//!
//! Backend crates convert their internal errors into one of these variants
//! before bubbling them up to a front-end. This keeps the public API small:
//! every failure a user can see falls into exactly one category, and the
//! `Display` text of a variant *is* the user-facing message.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ArtHelperError>;

#[derive(Debug, Error)]
pub enum ArtHelperError {
    /// The submit action fired without a medium selected. No request is
    /// issued in this case.
    #[error("Please select a medium first.")]
    NoMediumSelected,

    /// `OPENAI_API_KEY` is absent from the environment. Checked before any
    /// network call happens.
    #[error("OPENAI_API_KEY not set. See README.md for setup.")]
    MissingApiKey,

    /// The remote call failed for any reason: transport, auth, rate-limit,
    /// or a malformed reply. The wrapped string carries the underlying
    /// error text.
    #[error("API call failed: {0}")]
    Request(String),

    /// The service answered, but the first choice carried no usable text.
    #[error("API response content is empty.")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_message_names_the_variable() {
        let msg = ArtHelperError::MissingApiKey.to_string();
        assert!(msg.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn request_error_wraps_the_underlying_text() {
        let err = ArtHelperError::Request("connection refused".into());
        assert_eq!(err.to_string(), "API call failed: connection refused");
    }

    #[test]
    fn validation_and_empty_messages_are_stable() {
        assert_eq!(
            ArtHelperError::NoMediumSelected.to_string(),
            "Please select a medium first."
        );
        assert_eq!(
            ArtHelperError::EmptyResponse.to_string(),
            "API response content is empty."
        );
    }
}
