//! Core data types for the bank ledger.

use serde::{Deserialize, Serialize};

/// Reserved name of the issuing bank account.
///
/// The bank is exempt from ownership checks and the daily cap, and is the
/// only account allowed to open new accounts.
pub const BANK_NAME: &str = "MPLBANK";

/// One ledger participant, stored under its name as the primary key.
///
/// Serialized field names are fixed for wire compatibility with existing
/// ledger data; do not rename them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, immutable after creation.
    pub name: String,

    /// Units of value currently held.
    #[serde(rename = "currentbalance")]
    pub current_balance: u64,

    /// Cumulative amount debited during the current ledger day.
    ///
    /// Only meaningful while `current_day` matches the global day counter;
    /// otherwise it is stale and must be read as zero (lazy reset).
    #[serde(rename = "totalforday")]
    pub total_for_day: u64,

    /// Global day counter value as of the last debit.
    #[serde(rename = "currentday")]
    pub current_day: u64,

    /// Identity authorized to debit this account. Present but not enforced
    /// for the bank account.
    pub owner: String,
}

impl Account {
    /// Synthesize a freshly opened account with a zero balance.
    pub fn open(name: impl Into<String>, current_day: u64, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_balance: 0,
            total_for_day: 0,
            current_day,
            owner: owner.into(),
        }
    }

    /// Daily total with the lazy day reset applied.
    ///
    /// The stored record is never mutated here; a stale total is only
    /// persisted as zero when a later transfer writes the record back.
    pub fn effective_total_for_day(&self, global_day: u64) -> u64 {
        if self.current_day == global_day {
            self.total_for_day
        } else {
            0
        }
    }
}

/// Answer to a balance query.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceView {
    pub name: String,
    pub balance: u64,
}

/// Answer to a daily-usage query, lazy reset applied.
#[derive(Debug, Clone, Serialize)]
pub struct DailyUsageView {
    pub name: String,
    pub total_for_day: u64,
}

/// One historical balance snapshot, paired with the write that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceAtVersion {
    pub tx_id: String,
    pub balance: u64,
}

/// Post-transfer state returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub debit_balance: u64,
    pub credit_balance: u64,
    pub total_for_day: u64,
}
