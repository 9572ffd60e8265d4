//! Aggregate statistics and keyword ranking over stored records
//!
//! `analyze` is a pure function of the records it is given: no I/O, no
//! state kept between calls.

mod keywords;
mod types;

pub use keywords::{is_stop_word, rank_keywords, word_count, STOP_WORDS};
pub use types::{AnalyticsError, AnalyticsSummary, KeywordRank};

use crate::record::SummaryRecord;

/// Number of keywords reported in `AnalyticsSummary::top_keywords`
pub const TOP_KEYWORDS: usize = 5;

/// Compute averages and top keywords for `records`.
///
/// Keyword ties resolve by first occurrence in the order `records` are
/// given; pass them oldest first for insertion-order tie-breaking.
///
/// Fails with `AnalyticsError::NoData` when `records` is empty.
pub fn analyze(records: &[SummaryRecord]) -> Result<AnalyticsSummary, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::NoData);
    }

    let total = records.len();
    let input_words: usize = records.iter().map(|r| word_count(&r.input_text)).sum();
    let summary_words: usize = records.iter().map(|r| word_count(&r.summary_text)).sum();

    Ok(AnalyticsSummary {
        total_records: total,
        avg_input_words: input_words as f64 / total as f64,
        avg_summary_words: summary_words as f64 / total as f64,
        top_keywords: rank_keywords(records.iter().map(|r| r.input_text.as_str()), TOP_KEYWORDS),
    })
}
