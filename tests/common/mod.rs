//! Shared fixtures for pipeline integration tests

use async_trait::async_trait;
use std::sync::Arc;
use synopsis::{
    OpenStore, SqliteHistoryStore, SummarizeOptions, Summarizer, SummarizerError, SummaryPipeline,
};

/// Marker word that makes `ScriptedSummarizer` fail
pub const FAIL_MARKER: &str = "explode";

/// Deterministic summarizer: keeps the first `max_length / 10` words, fails
/// on any text containing `FAIL_MARKER`.
pub struct ScriptedSummarizer;

#[async_trait]
impl Summarizer for ScriptedSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummarizeOptions,
    ) -> Result<String, SummarizerError> {
        let text = synopsis::summarizer::ensure_text(text)?;
        if text.contains(FAIL_MARKER) {
            return Err(SummarizerError::Failed("scripted failure".to_string()));
        }
        let keep = (options.max_length / 10).max(1);
        Ok(text.split_whitespace().take(keep).collect::<Vec<_>>().join(" "))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub fn pipeline_on(store: Arc<SqliteHistoryStore>) -> SummaryPipeline {
    SummaryPipeline::new(Arc::new(ScriptedSummarizer), store)
}

pub fn memory_store() -> Arc<SqliteHistoryStore> {
    Arc::new(SqliteHistoryStore::open_in_memory().unwrap())
}
