//! Mock summarizer for testing — returns a preconfigured outcome.

use super::traits::{ensure_text, SummarizeOptions, Summarizer, SummarizerError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockSummarizer {
    outcome: Result<String, String>,
    calls: AtomicUsize,
}

impl MockSummarizer {
    /// Create a mock that always returns `summary`.
    pub fn returning(summary: impl Into<String>) -> Self {
        Self {
            outcome: Ok(summary.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose capability always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls that got past input validation.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        text: &str,
        _options: &SummarizeOptions,
    ) -> Result<String, SummarizerError> {
        ensure_text(text)?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map_err(SummarizerError::Failed)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
