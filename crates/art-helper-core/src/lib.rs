//! # `art-helper-core` – shared building blocks of the Art Helper
//!
//! Everything both front-ends (terminal and web) have in common lives here:
//!
//! | Module         | What it provides                                              |
//! |----------------|---------------------------------------------------------------|
//! | **`medium`**   | The fixed catalogue of five art mediums                       |
//! | **`prompt`**   | The materials-advice prompt template (via **`builder`**)      |
//! | **`provider`** | The `CompletionProvider` seam to a chat-completion backend    |
//! | **`mock`**     | Offline canned provider for `--mock` runs and tests           |
//! | **`session`**  | `RequestState` lifecycle and the shared `submit` driver       |
//! | **`config`**   | Environment configuration and key masking                     |
//! | **`error`**    | The `ArtHelperError` taxonomy and `Result` alias              |
//!
//! The crate is deliberately free of HTTP and terminal concerns; the real
//! backend lives in `art-helper-openai` and the user interfaces in their own
//! binary crates.
//!
//! ## Quick example
//!
//! ```rust
//! use art_helper_core::medium::Medium;
//! use art_helper_core::prompt::MaterialsPrompt;
//!
//! let prompt = MaterialsPrompt::new(Medium::Watercolor).render();
//! assert!(prompt.contains("'watercolor'"));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod medium;
pub mod mock;
pub mod prompt;
pub mod provider;
pub mod session;

pub use error::{ArtHelperError, Result};
