//! Process configuration loaded from environment variables.
//!
//! Both binaries call [`Config::from_env`] once at startup (after loading
//! `.env`).  Everything is optional except that real requests need
//! `OPENAI_API_KEY`; that check happens when the HTTP backend is built, not
//! here, so the CLI can still run `--mock` on a bare environment.

use std::env;

/// Default chat-completions endpoint (OpenRouter).
pub const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";

/// Default model routed through the endpoint above.
pub const DEFAULT_MODEL: &str = "mistralai/mistral-small-creative";

/// Application configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Web server port (`PORT`, default 8080).
    pub port: u16,
    /// API key for the chat-completions endpoint (`OPENAI_API_KEY`).
    pub api_key: Option<String>,
    /// Endpoint base URL (`OPENAI_API_BASE`).
    pub api_base: String,
    /// Model identifier (`OPENAI_MODEL`).
    pub model: String,
    /// Print request diagnostics in the CLI (`DEBUG_OPENAI`).
    pub debug: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            api_key: lookup("OPENAI_API_KEY").filter(|key| !key.is_empty()),
            api_base: lookup("OPENAI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            debug: lookup("DEBUG_OPENAI")
                .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

/// Obscure an API key for diagnostic output.
///
/// Keys longer than ten characters keep their first six and last four;
/// shorter keys keep two on each side.  A missing or empty key renders as
/// `(none)`.  Counts characters, not bytes.
pub fn mask_key(key: Option<&str>) -> String {
    let key = match key {
        Some(k) if !k.is_empty() => k,
        _ => return "(none)".to_string(),
    };

    let chars: Vec<char> = key.chars().collect();
    let (head, tail) = if chars.len() > 10 { (6, 4) } else { (2, 2) };

    let start: String = chars.iter().take(head).collect();
    let end: String = chars[chars.len().saturating_sub(tail)..].iter().collect();
    format!("{start}...{end}")
}
