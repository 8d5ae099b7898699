mod backend;
mod provider_impl;

pub use backend::{OpenAiBackend, OpenAiBackendBuilder};
pub mod api_v1;
mod client;
pub mod error;
