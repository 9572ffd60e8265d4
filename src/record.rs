//! The persisted history unit

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Storage and display format for `created_at` (second resolution, sortable as text)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Store-assigned identifier of a record
///
/// Ids start at 1 and grow by one per successful append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One submitted text together with the summary generated for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: RecordId,
    /// The trimmed text the user submitted
    pub input_text: String,
    pub summary_text: String,
    /// Local wall-clock time of insertion, truncated to seconds
    pub created_at: NaiveDateTime,
}

impl SummaryRecord {
    /// `created_at` rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn created_at_string(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}
