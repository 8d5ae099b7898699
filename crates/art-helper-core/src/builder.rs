//! Builder-style helper for constructing **plain-text prompts**.
//!
//! Writing multi-line instruction strings inline is tedious and error-prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the line breaks.  Every method returns `self`, enabling
//! call-chaining:
//!
//! ```rust
//! use art_helper_core::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .add_line("You are an expert art instructor.")
//!     .add_numbered_item(1, "Essential Materials: a concise bullet list.")
//!     .finalize();
//!
//! assert!(text.starts_with("You are an expert art instructor."));
//! ```
//!
//! The builder performs **no validation** besides `expect`ing that writing to
//! the internal `String` never fails (which it shouldn't).  It also refrains
//! from smart-formatting to stay predictable: newlines and whitespace are
//! emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce prompt text.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you're done, call [`Self::finalize`] to obtain the assembled text.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a numbered instruction line: `1) text`.
    pub fn add_numbered_item(mut self, number: usize, line: impl Display) -> Self {
        writeln!(self.buffer, "{number}) {line}").expect("failed to write buffer");
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    ///
    /// The trailing newline of the last added line is trimmed so the result
    /// can be embedded into payloads without a dangling line break.
    pub fn finalize(self) -> String {
        self.buffer.trim_end_matches('\n').to_string()
    }
}
