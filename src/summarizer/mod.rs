//! Summarization capability behind a stable interface
//!
//! Implementations of the `Summarizer` trait:
//! - `HttpSummarizer`: remote inference endpoint (production)
//! - `LeadSummarizer`: extractive leading-sentence summary, no network
//! - `MockSummarizer`: preconfigured outcome (testing)

mod http;
mod lead;
mod mock;
mod traits;

pub use http::{
    HttpSummarizer, HttpSummarizerConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_REVISION,
};
pub use lead::LeadSummarizer;
pub use mock::MockSummarizer;
pub use traits::{ensure_text, SummarizeOptions, Summarizer, SummarizerError};
