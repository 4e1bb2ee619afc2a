//! State store abstraction and backends.
//!
//! The engine is written against the `StateStore` trait; the backends only
//! provide durable key-value state with lexical range scans and an
//! append-only per-key version history. No ledger semantics live here.

mod key;
mod memory;
mod sqlite;

pub use key::{validate_name, StateKey};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use chrono::{DateTime, Utc};

use crate::error::Result;

/// One historical write to a key, oldest-first in `history` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateVersion {
    /// Identifier of the write that produced this version.
    pub tx_id: String,
    /// Serialized value as of this version.
    pub value: Vec<u8>,
    /// When the write was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Versioned key-value store consumed by the ledger engine.
///
/// Implementations provide no cross-key atomicity and no concurrency
/// control; the engine's contract assumes the host serializes operations.
pub trait StateStore {
    /// Current value of a key, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write a value and append it to the key's version history.
    ///
    /// Returns the transaction id recorded for this write.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<String>;

    /// Remove the current value of a key. History is retained.
    fn delete(&mut self, key: &str) -> Result<()>;

    /// All current entries with `start <= key < end`, in lexical key order.
    fn range_scan(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>>;

    /// Full version history of a key, oldest first. Empty if never written.
    fn history(&self, key: &str) -> Result<Vec<StateVersion>>;
}
