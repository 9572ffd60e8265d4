//! Persistent summary history
//!
//! Records are kept through the `HistoryStore` trait. The shipped
//! implementation is `SqliteHistoryStore`, a single-file SQLite database.

mod sqlite;
mod traits;

pub use sqlite::{SqliteHistoryStore, DEFAULT_DB_FILE};
pub use traits::{HistoryStore, OpenStore, StorageError, StorageResult};
