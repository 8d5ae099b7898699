//! The seam between prompt construction and the model backend.
//!
//! A **provider** turns rendered prompt text into a network call to a
//! concrete chat-completion API and hands back the reply text.  The trait is
//! intentionally minimal:
//!
//! * **One method** – `complete`, which performs a *single* non-streaming
//!   round-trip and returns the trimmed content of the model's first choice.
//!
//! The future is boxed so the trait stays object-safe.  The session driver
//! is generic over implementors and does not care whether the other side is
//! the real HTTP backend or [`crate::mock::CannedCompletion`].

use std::{future::Future, pin::Pin};

use crate::error::Result;

/// A backend that answers one prompt with one completion.
///
/// Implementors perform exactly one request-response exchange per call.
/// There is no retry, no caching and no shared state between invocations;
/// each call stands alone.
pub trait CompletionProvider: Send + Sync {
    /// Execute the prompt and return the reply text.
    fn complete<'p>(
        &'p self,
        prompt: &'p str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>>;
}
