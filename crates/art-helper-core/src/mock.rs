//! Offline stand-in for the real chat-completion backend.
//!
//! `--mock` runs and tests need suggestions without a network or an API key.
//! [`CannedCompletion`] answers every prompt with the same fixed four-section
//! reply and never fails, so the surrounding plumbing (session lifecycle,
//! rendering, banners) can be exercised end to end.

use std::{future::Future, pin::Pin};

use crate::error::Result;
use crate::provider::CompletionProvider;

/// The reply every call returns, regardless of prompt.
const CANNED_REPLY: &str = "Essential Materials:\n- Paints\n- Brushes\n\n\
                            Practical Tips:\n- Start light, build up layers\n\n\
                            Budget Upgrades:\n- Student-grade paint set\n\n\
                            Nice-to-Have Upgrades:\n- Professional brush set";

/// Provider that resolves immediately with a fixed canned reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedCompletion;

impl CannedCompletion {
    pub fn new() -> Self {
        Self
    }
}

impl CompletionProvider for CannedCompletion {
    fn complete<'p>(
        &'p self,
        _prompt: &'p str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>> {
        Box::pin(async { Ok(CANNED_REPLY.to_string()) })
    }
}
