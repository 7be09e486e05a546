//! Builder-style helper for constructing **instruction prompts**.
//!
//! Writing multi-line prompt strings inline is tedious and error-prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the concatenation.  Every method returns `self`, enabling
//! call-chaining:
//!
//! ```rust
//! use synthgen_prompt::PromptBuilder;
//!
//! let prompt = PromptBuilder::new()
//!     .add_line("Generate exactly 3 records.")
//!     .add_blank_line()
//!     .add_line("Respond in valid JSON format only.")
//!     .finalize();
//!
//! assert!(prompt.starts_with("Generate exactly 3 records."));
//! ```
//!
//! The builder performs **no validation** besides `expect`ing that writing to
//! the internal `String` never fails (which it shouldn’t).  It also refrains
//! from smart-formatting to stay predictable—newlines and whitespace are
//! emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce newline-separated instruction text.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled prompt.
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

    /// Append text to the current line *without* a trailing newline.
    ///
    /// Useful when a sentence is assembled from conditional fragments.
    pub fn add_fragment(mut self, fragment: impl Display) -> Self {
        write!(self.buffer, "{fragment}").expect("failed to write buffer");
        self
    }

    /// Add every item of `lines` as its own line.
    pub fn add_lines<I, T>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        lines.into_iter().fold(self, |b, line| b.add_line(line))
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    ///
    /// A single trailing newline left over from the last [`Self::add_line`]
    /// is removed; interior newlines are preserved verbatim.
    pub fn finalize(mut self) -> String {
        if self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_emitted_in_order() {
        let text = PromptBuilder::new()
            .add_line("first")
            .add_line("second")
            .finalize();
        assert_eq!(text, "first\nsecond");
    }

    #[test]
    fn fragments_join_on_one_line() {
        let text = PromptBuilder::new()
            .add_fragment("Please generate 5 records")
            .add_fragment(" for the topic \"Cities\".")
            .finalize();
        assert_eq!(text, "Please generate 5 records for the topic \"Cities\".");
    }

    #[test]
    fn blank_line_separates_sections() {
        let text = PromptBuilder::new()
            .add_line("a")
            .add_blank_line()
            .add_line("b")
            .finalize();
        assert_eq!(text, "a\n\nb");
    }

    #[test]
    fn finalize_trims_single_trailing_newline() {
        let text = PromptBuilder::new().add_line("only").finalize();
        assert_eq!(text, "only");
    }
}
