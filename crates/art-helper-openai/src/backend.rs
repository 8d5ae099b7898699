use std::sync::Arc;

use art_helper_core::config::{Config, DEFAULT_MODEL};
use art_helper_core::error::{ArtHelperError, Result};

use crate::client::OpenAiClient;

/// Requests ask for at most this many completion tokens.
const DEFAULT_MAX_TOKENS: i64 = 600;

/// Sampling temperature sent with every request.
const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value
/// that implements [`art_helper_core::provider::CompletionProvider`].
///
/// It stores the chosen model and sampling settings, owns a shareable,
/// connection-pooled `reqwest::Client`, and provides a fluent
/// [`OpenAiBackendBuilder`] so callers don't have to juggle
/// `Option<String>` manually.  Cloning is cheap and clones share the
/// underlying client, so long-lived services build one backend and clone
/// it per request.  All user-facing functionality sits on the provider
/// trait once the backend is plugged in.
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    pub(crate) client: Arc<OpenAiClient>,
    pub(crate) model: String,
    pub(crate) max_tokens: i64,
    pub(crate) temperature: f64,
}

/// Builder for [`OpenAiBackend`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use art_helper_core::config::Config;
/// use art_helper_openai::OpenAiBackendBuilder;
///
/// let config = Config::from_env();
/// let backend = OpenAiBackendBuilder::from_config(&config)
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
///
/// A missing API key only surfaces during [`Self::build`], as the
/// configuration error; no network traffic happens before that check.
#[derive(Default)]
pub struct OpenAiBackendBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
}

impl OpenAiBackendBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from an already-loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: Some(config.api_base.clone()),
            model: Some(config.model.clone()),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Finalise the builder and return a ready-to-use backend.
    ///
    /// # Errors
    ///
    /// * [`ArtHelperError::MissingApiKey`] – if no API key was supplied.
    pub fn build(self) -> Result<OpenAiBackend> {
        let api_key = self.api_key.ok_or(ArtHelperError::MissingApiKey)?;
        let client = OpenAiClient::new(api_key, self.base_url);

        Ok(OpenAiBackend {
            client: Arc::new(client),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        })
    }
}
