//! Analytics result types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the analytics engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// There are no records to analyze. Expected on a fresh store.
    #[error("no summaries found to analyze")]
    NoData,
}

/// A keyword and how many times it occurs across all inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRank {
    pub term: String,
    pub count: usize,
}

impl KeywordRank {
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// Aggregate statistics over every stored record
///
/// Averages keep full precision; rounding is left to whoever renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_records: usize,
    pub avg_input_words: f64,
    pub avg_summary_words: f64,
    /// Most frequent non-stop-word input terms, highest count first
    pub top_keywords: Vec<KeywordRank>,
}
