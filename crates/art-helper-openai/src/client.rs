use std::time::Duration;

use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tracing::debug;

use art_helper_core::config::DEFAULT_API_BASE;

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

/// Minimal HTTP client for a `/chat/completions` endpoint.
///
/// * Non-streaming only (one request, one response).
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl OpenAiClient {
    /// Convenience constructor building a default `reqwest` client with a
    /// 30 s timeout and Rustls TLS.  `base_url` falls back to the OpenRouter
    /// endpoint when `None`.
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("building reqwest client");

        Self::with_http(api_key, http, base_url)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_API_BASE.to_owned()),
        }
    }

    /// Endpoint URL; tolerates a trailing slash on the configured base.
    fn url(&self) -> String {
        format!("{}/chat/completions", self.base.trim_end_matches('/'))
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let url = self.url();
        debug!(url = %url, model = %request.model, "dispatching chat completion");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(OpenAiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        debug!(
            choices = parsed.choices.len(),
            total_tokens = ?parsed.usage.map(|usage| usage.total_tokens),
            "chat completion received"
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_endpoint() {
        let client = OpenAiClient::with_http(
            "sk-test",
            HttpClient::new(),
            Some("https://example.test/v1".into()),
        );
        assert_eq!(client.url(), "https://example.test/v1/chat/completions");
    }

    #[test]
    fn url_tolerates_a_trailing_slash() {
        let client = OpenAiClient::with_http(
            "sk-test",
            HttpClient::new(),
            Some("https://example.test/v1/".into()),
        );
        assert_eq!(client.url(), "https://example.test/v1/chat/completions");
    }

    #[test]
    fn missing_base_falls_back_to_openrouter() {
        let client = OpenAiClient::with_http("sk-test", HttpClient::new(), None);
        assert_eq!(
            client.url(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }
}
