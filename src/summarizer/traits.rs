//! Summarizer trait, options and errors

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Errors from a summarization capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummarizerError {
    /// Text was empty or whitespace only; no external call was made.
    #[error("input text is empty")]
    InvalidInput,
    /// The underlying capability failed; carries its message verbatim.
    #[error("summarization failed: {0}")]
    Failed(String),
}

/// Length bounds and decoding mode passed to the capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeOptions {
    /// Upper bound on output length, in tokens/words
    pub max_length: usize,
    /// Lower bound on output length, in tokens/words
    pub min_length: usize,
    /// Greedy decoding when true, sampled decoding otherwise
    pub deterministic: bool,
}

impl Default for SummarizeOptions {
    /// The bounds every pipeline run uses.
    fn default() -> Self {
        Self {
            max_length: 50,
            min_length: 25,
            deterministic: true,
        }
    }
}

/// A text-summarization capability.
///
/// Implementations are stateless between calls and never retry: a failure is
/// reported once as `SummarizerError::Failed` and left to the caller.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text`.
    ///
    /// Must fail with `SummarizerError::InvalidInput` before doing any I/O when
    /// `text` is blank; use [`ensure_text`] for that check.
    async fn summarize(
        &self,
        text: &str,
        options: &SummarizeOptions,
    ) -> Result<String, SummarizerError>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}

/// Trim `text`, rejecting it when nothing is left.
pub fn ensure_text(text: &str) -> Result<&str, SummarizerError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(SummarizerError::InvalidInput)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_pipeline_bounds() {
        let options = SummarizeOptions::default();
        assert_eq!(options.max_length, 50);
        assert_eq!(options.min_length, 25);
        assert!(options.deterministic);
    }

    #[test]
    fn ensure_text_trims_and_rejects_blank() {
        assert_eq!(ensure_text("  hello \n"), Ok("hello"));
        assert_eq!(ensure_text(""), Err(SummarizerError::InvalidInput));
        assert_eq!(ensure_text(" \t\n "), Err(SummarizerError::InvalidInput));
    }
}
