//! # Bank Core
//!
//! Core library for MPLBANK - a minimal ledger of named accounts with a
//! single issuing authority, ownership-checked transfers, and a per-account
//! daily transfer cap.
//!
//! This crate provides the ledger engine, the data model, and the storage
//! abstractions independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **engine**: Transfer authorization, account opening, day rollover, and
//!   query operations
//! - **model**: Account record and query views
//! - **store**: State store trait, typed key namespace, and backends
//!   (in-memory, SQLite)
//! - **identity**: Caller identity resolution seam
//! - **error**: Error taxonomy shared by all operations

pub mod engine;
pub mod error;
pub mod identity;
pub mod model;
pub mod store;

pub use engine::{EngineConfig, LedgerEngine};
pub use error::{LedgerError, Result};
pub use identity::{FixedIdentity, IdentityResolver, SubjectNameResolver};
pub use model::{Account, BalanceAtVersion, BalanceView, DailyUsageView, TransferReceipt, BANK_NAME};
pub use store::{MemoryStore, SqliteStore, StateKey, StateStore, StateVersion};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
