//! Storage trait definitions

use crate::record::SummaryRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Date parsing error: {0}")]
    DateParse(String),

    #[error("Refusing to store a record with empty input text")]
    EmptyInput,

    #[error("Storage connection lock poisoned")]
    LockPoisoned,
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Append-only log of summary records
///
/// Implementations must be thread-safe (Send + Sync): several pipelines may
/// share one store, and concurrent appends must still receive distinct,
/// strictly increasing ids with no gaps.
pub trait HistoryStore: Send + Sync {
    /// Persist a new record and return it with its id and timestamp filled in.
    ///
    /// The record is committed before this returns; readers never observe a
    /// partially written row.
    fn append(&self, input_text: &str, summary_text: &str) -> StorageResult<SummaryRecord>;

    /// All records, most recent (highest id) first
    fn list_all_reverse(&self) -> StorageResult<Vec<SummaryRecord>>;
}

/// Extension trait for opening stores from paths
pub trait OpenStore: HistoryStore + Sized {
    /// Open or create a store at the given path
    fn open(path: impl AsRef<Path>) -> StorageResult<Self>;

    /// Create an in-memory store (useful for testing)
    fn open_in_memory() -> StorageResult<Self>;
}
