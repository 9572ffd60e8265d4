//! SQLite storage backend for summary history

use super::traits::{HistoryStore, OpenStore, StorageError, StorageResult};
use crate::record::{RecordId, SummaryRecord, TIMESTAMP_FORMAT};
use chrono::{Local, NaiveDateTime, SubsecRound};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Database file used when no path is configured, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "summaries.db";

/// How long a writer waits for another connection's write lock on the same file
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed history store
///
/// Uses a single `summary_history` table. Thread-safe via an internal mutex on
/// the connection; every append runs in an immediate transaction so that
/// separate connections to the same file are serialized as well.
pub struct SqliteHistoryStore {
    conn: Mutex<Connection>,
}

impl SqliteHistoryStore {
    /// Initialize the database schema
    fn init_schema(conn: &Connection) -> StorageResult<()> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS summary_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                input_text TEXT NOT NULL,
                summary_text TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            -- Concurrent readers while a write is in flight
            PRAGMA journal_mode = WAL;
            "#,
        )?;
        Ok(())
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }

    /// Current local time at second resolution
    fn now() -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }

    fn parse_timestamp(raw: &str) -> StorageResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .map_err(|e| StorageError::DateParse(format!("{raw:?}: {e}")))
    }

    /// Deserialize a record from database columns
    fn row_to_record(
        id: i64,
        input_text: String,
        summary_text: String,
        created_at: String,
    ) -> StorageResult<SummaryRecord> {
        Ok(SummaryRecord {
            id: RecordId::new(id),
            input_text,
            summary_text,
            created_at: Self::parse_timestamp(&created_at)?,
        })
    }
}

impl OpenStore for SqliteHistoryStore {
    fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!(path = %path.as_ref().display(), "opening history store");
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn append(&self, input_text: &str, summary_text: &str) -> StorageResult<SummaryRecord> {
        if input_text.trim().is_empty() {
            return Err(StorageError::EmptyInput);
        }

        let mut conn = self.lock()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        // created_at must never run backwards relative to id, even if the
        // wall clock does.
        let latest: Option<String> = tx
            .query_row(
                "SELECT created_at FROM summary_history ORDER BY id DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        let mut created_at = Self::now();
        if let Some(latest) = latest {
            created_at = created_at.max(Self::parse_timestamp(&latest)?);
        }

        tx.execute(
            "INSERT INTO summary_history (input_text, summary_text, created_at) VALUES (?1, ?2, ?3)",
            params![
                input_text,
                summary_text,
                created_at.format(TIMESTAMP_FORMAT).to_string(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(SummaryRecord {
            id: RecordId::new(id),
            input_text: input_text.to_string(),
            summary_text: summary_text.to_string(),
            created_at,
        })
    }

    fn list_all_reverse(&self) -> StorageResult<Vec<SummaryRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, input_text, summary_text, created_at FROM summary_history ORDER BY id DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, input_text, summary_text, created_at) = row?;
            records.push(Self::row_to_record(id, input_text, summary_text, created_at)?);
        }
        Ok(records)
    }
}
