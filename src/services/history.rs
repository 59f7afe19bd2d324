use std::fs;
use std::path::Path;

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::error::StorageError;
use crate::model::record::TranslationRecord;

// Column names match the history files written by earlier releases.
const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS history (
        froml TEXT NOT NULL,
        text_trans TEXT NOT NULL,
        tol TEXT NOT NULL,
        transl TEXT NOT NULL
    )
";

/// Append-only log of completed translations.
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    /// Opens (or creates) the database file. Call [`initialize`](Self::initialize)
    /// before use.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened history database");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Creates the history table if it is missing. Safe to call on every start.
    pub fn initialize(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(CREATE_TABLE)?;
        Ok(())
    }

    /// Persists one record. No validation happens here.
    pub fn append(&self, record: &TranslationRecord) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO history (froml, text_trans, tol, transl) VALUES (?1, ?2, ?3, ?4)",
            params![
                record.source_language,
                record.source_text,
                record.target_language,
                record.translated_text
            ],
        )?;
        debug!(target_language = %record.target_language, "history record appended");
        Ok(())
    }

    /// Every stored record, oldest first.
    pub fn list_all(&self) -> Result<Vec<TranslationRecord>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT froml, text_trans, tol, transl FROM history ORDER BY rowid")?;

        let rows = stmt.query_map([], |row| {
            Ok(TranslationRecord {
                source_language: row.get(0)?,
                source_text: row.get(1)?,
                target_language: row.get(2)?,
                translated_text: row.get(3)?,
            })
        })?;

        let records = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    pub fn len(&self) -> Result<usize, StorageError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
        Ok(usize::try_from(n).unwrap_or(0))
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}
