//! SummaryPipeline: the entry point front ends drive
//!
//! Runs summarize→persist for each submission and serves history and
//! analytics reads. It is the only component that talks to both the
//! summarizer and the history store.

use crate::analytics::{self, AnalyticsError, AnalyticsSummary};
use crate::record::SummaryRecord;
use crate::storage::{HistoryStore, StorageError};
use crate::summarizer::{SummarizeOptions, Summarizer, SummarizerError};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced to front ends
///
/// None of these are fatal: a failed call leaves the store as it was.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input text is empty")]
    InvalidInput,

    #[error("summarization failed: {0}")]
    SummarizationFailed(String),

    #[error("persistence error: {0}")]
    Persistence(#[from] StorageError),

    #[error("no summaries found to analyze")]
    NoData,
}

impl PipelineError {
    /// True for outcomes the user can act on or that are expected
    /// (blank input, nothing stored yet).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput | Self::NoData)
    }
}

impl From<SummarizerError> for PipelineError {
    fn from(err: SummarizerError) -> Self {
        match err {
            SummarizerError::InvalidInput => Self::InvalidInput,
            SummarizerError::Failed(message) => Self::SummarizationFailed(message),
        }
    }
}

impl From<AnalyticsError> for PipelineError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::NoData => Self::NoData,
        }
    }
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Coordinates a summarizer and a history store
#[derive(Clone)]
pub struct SummaryPipeline {
    summarizer: Arc<dyn Summarizer>,
    store: Arc<dyn HistoryStore>,
    options: SummarizeOptions,
}

impl SummaryPipeline {
    /// Create a pipeline using the default length bounds (25..=50, greedy)
    pub fn new(summarizer: Arc<dyn Summarizer>, store: Arc<dyn HistoryStore>) -> Self {
        Self {
            summarizer,
            store,
            options: SummarizeOptions::default(),
        }
    }

    /// Summarize `raw_text` and persist the pair.
    ///
    /// The input is trimmed first; the stored `input_text` is the trimmed
    /// text. Nothing is written unless summarization succeeds, and the
    /// returned record is already committed.
    pub async fn submit(&self, raw_text: &str) -> PipelineResult<SummaryRecord> {
        let input = raw_text.trim();
        if input.is_empty() {
            return Err(PipelineError::InvalidInput);
        }

        let summary = match self.summarizer.summarize(input, &self.options).await {
            Ok(summary) => summary,
            Err(err) => {
                tracing::warn!(backend = self.summarizer.name(), error = %err, "summarization failed");
                return Err(err.into());
            }
        };

        let record = self.store.append(input, &summary)?;
        tracing::info!(
            id = %record.id,
            input_words = analytics::word_count(&record.input_text),
            summary_words = analytics::word_count(&record.summary_text),
            "summary saved"
        );
        Ok(record)
    }

    /// Every stored record, newest first
    pub fn history(&self) -> PipelineResult<Vec<SummaryRecord>> {
        Ok(self.store.list_all_reverse()?)
    }

    /// Statistics over every stored record
    ///
    /// Records are fed to the engine in insertion order, so keyword ties
    /// resolve by earliest submission.
    pub fn analyze(&self) -> PipelineResult<AnalyticsSummary> {
        let mut records = self.store.list_all_reverse()?;
        records.reverse();
        Ok(analytics::analyze(&records)?)
    }
}
