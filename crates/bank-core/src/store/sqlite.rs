//! SQLite state store backend.
//!
//! Current state lives in a `state` table keyed by the encoded key; every
//! write also appends to the `state_versions` table, which is never pruned
//! and backs the history queries. Both inserts happen in one transaction.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::{StateStore, StateVersion};
use crate::error::{LedgerError, Result};

/// SQLite-backed store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    fn sqlite_error(err: rusqlite::Error) -> LedgerError {
        LedgerError::Storage(format!("SQLite error: {}", err))
    }

    /// Open (or create) a store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(Self::sqlite_error)?;
        Self::from_connection(conn)
    }

    /// Open an ephemeral in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Self::sqlite_error)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS state (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL
            );

            CREATE TABLE IF NOT EXISTS state_versions (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                key TEXT NOT NULL,
                tx_id TEXT NOT NULL,
                value BLOB NOT NULL,
                recorded_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_state_versions_key
                ON state_versions(key, seq);
            "#,
        )
        .map_err(Self::sqlite_error)?;

        Ok(Self { conn })
    }
}

impl StateStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.conn
            .query_row("SELECT value FROM state WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Self::sqlite_error)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<String> {
        let tx_id = Uuid::new_v4().to_string();
        let recorded_at = Utc::now().to_rfc3339();

        let tx = self.conn.transaction().map_err(Self::sqlite_error)?;
        tx.execute(
            "INSERT INTO state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(Self::sqlite_error)?;
        tx.execute(
            "INSERT INTO state_versions (key, tx_id, value, recorded_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![key, tx_id, value, recorded_at],
        )
        .map_err(Self::sqlite_error)?;
        tx.commit().map_err(Self::sqlite_error)?;

        Ok(tx_id)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM state WHERE key = ?1", [key])
            .map_err(Self::sqlite_error)?;
        Ok(())
    }

    fn range_scan(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM state WHERE key >= ?1 AND key < ?2 ORDER BY key")
            .map_err(Self::sqlite_error)?;
        let rows = stmt
            .query_map([start, end], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(Self::sqlite_error)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(Self::sqlite_error)?);
        }
        Ok(out)
    }

    fn history(&self, key: &str) -> Result<Vec<StateVersion>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT tx_id, value, recorded_at FROM state_versions
                 WHERE key = ?1 ORDER BY seq",
            )
            .map_err(Self::sqlite_error)?;
        let rows = stmt
            .query_map([key], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, Vec<u8>>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(Self::sqlite_error)?;

        let mut out = Vec::new();
        for row in rows {
            let (tx_id, value, recorded_at) = row.map_err(Self::sqlite_error)?;
            let recorded_at = DateTime::parse_from_rfc3339(&recorded_at)
                .map_err(|e| LedgerError::Storage(format!("invalid timestamp: {}", e)))?
                .with_timezone(&Utc);
            out.push(StateVersion {
                tx_id,
                value,
                recorded_at,
            });
        }
        Ok(out)
    }
}
