//! Per-interaction request lifecycle shared by both front-ends.
//!
//! A suggestion request moves through `Idle → Loading → (Success | Error)`.
//! [`RequestState`] is the record of one such interaction and [`submit`]
//! drives it: validate the selection, render the prompt, await the provider,
//! settle the state.  The CLI prints the settled state to the terminal; the
//! web endpoint serializes it to JSON as-is.
//!
//! ```rust
//! use art_helper_core::session::RequestState;
//!
//! let mut state = RequestState::new();
//! state.begin();
//! assert!(state.loading);
//!
//! state.succeed("Essential Materials:\n- Paints");
//! assert!(!state.loading);
//! assert!(state.error.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ArtHelperError, Result};
use crate::medium::Medium;
use crate::prompt::MaterialsPrompt;
use crate::provider::CompletionProvider;

/// Snapshot of one suggestion interaction.
///
/// Invariant: once settled, `loading` is `false` and exactly one of
/// `response` / `error` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestState {
    pub loading: bool,
    pub response: String,
    pub error: String,
}

impl RequestState {
    /// Fresh idle state: not loading, nothing to show.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading phase, discarding any earlier outcome.
    pub fn begin(&mut self) {
        self.loading = true;
        self.response.clear();
        self.error.clear();
    }

    /// Settle with the model's reply.
    pub fn succeed(&mut self, text: impl Into<String>) {
        self.loading = false;
        self.response = text.into();
        self.error.clear();
    }

    /// Settle with a user-facing error message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = message.into();
        self.response.clear();
    }
}

/// Run one suggestion interaction from selection to settled state.
///
/// With no medium selected the provider is never touched: the state settles
/// immediately with the validation message.  Otherwise the provider comes
/// from `make_provider`, so configuration failures (a missing API key) land
/// in the state the same way request failures do.
pub async fn submit<P, F>(selection: Option<Medium>, make_provider: F) -> RequestState
where
    P: CompletionProvider,
    F: FnOnce() -> Result<P>,
{
    let mut state = RequestState::new();

    let Some(medium) = selection else {
        state.fail(ArtHelperError::NoMediumSelected.to_string());
        return state;
    };

    state.begin();

    let provider = match make_provider() {
        Ok(provider) => provider,
        Err(err) => {
            state.fail(err.to_string());
            return state;
        }
    };

    let prompt = MaterialsPrompt::new(medium).render();
    match provider.complete(&prompt).await {
        Ok(text) => state.succeed(text),
        Err(err) => state.fail(err.to_string()),
    }

    state
}
