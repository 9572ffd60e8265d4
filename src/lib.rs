//! Synopsis: text summarization with a persistent history and keyword analytics
//!
//! A submitted text is summarized by a pluggable capability, the
//! (input, summary) pair is appended to a durable history, and statistics
//! are computed on demand over everything stored.
//!
//! # Core Concepts
//!
//! - **Summarizer**: text in, summary out, behind an async trait
//! - **HistoryStore**: append-only record log, newest-first reads
//! - **Analytics**: average word counts and top keywords, a pure function of the records
//! - **SummaryPipeline**: summarize→persist, plus history and analytics reads
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use synopsis::{MockSummarizer, OpenStore, SqliteHistoryStore, SummaryPipeline};
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let store = Arc::new(SqliteHistoryStore::open_in_memory().unwrap());
//! let pipeline = SummaryPipeline::new(Arc::new(MockSummarizer::returning("short")), store);
//! let record = rt.block_on(pipeline.submit("a much longer text")).unwrap();
//! assert_eq!(record.id.as_i64(), 1);
//! ```

pub mod analytics;
pub mod config;
mod pipeline;
mod record;
pub mod report;
pub mod storage;
pub mod summarizer;

pub use analytics::{analyze, AnalyticsError, AnalyticsSummary, KeywordRank};
pub use config::{Backend, ConfigError, Settings};
pub use pipeline::{PipelineError, PipelineResult, SummaryPipeline};
pub use record::{RecordId, SummaryRecord, TIMESTAMP_FORMAT};
pub use storage::{HistoryStore, OpenStore, SqliteHistoryStore, StorageError, StorageResult};
pub use summarizer::{
    HttpSummarizer, LeadSummarizer, MockSummarizer, SummarizeOptions, Summarizer, SummarizerError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
