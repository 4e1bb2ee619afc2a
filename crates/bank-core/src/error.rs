//! Error types for bank core operations.
//!
//! Every operation reports failure synchronously as one of these variants
//! with a human-readable reason. Nothing is retried at this level; retry,
//! if any, belongs to whichever host embeds the engine.

use thiserror::Error;

/// Result type alias for bank operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for bank operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Amount argument did not parse as a non-negative integer
    #[error("invalid transaction amount, expecting an integer value")]
    InvalidAmount,

    /// Requester does not own the debit account
    #[error("you are not the owner of this account, transaction cancelled")]
    NotOwner,

    /// Account key has no current value in the store
    #[error("entity not found: {0}")]
    NotFound(String),

    /// Cumulative debits for the current ledger day would exceed the cap
    #[error("total amount for fund transfer exceeds daily limit")]
    DailyCapExceeded,

    /// Debit account balance is smaller than the requested amount
    #[error("insufficient funds in debit account")]
    InsufficientFunds,

    /// Opening amount for a new account exceeds the ceiling
    #[error("amount requested too large")]
    OpeningCeilingExceeded,

    /// The bank may fund a given account only once
    #[error("account {0} already credited by the bank")]
    AlreadyFunded(String),

    /// Only the bank account may credit a nonexistent account
    #[error("only the bank can open an account")]
    OnlyBankMayOpen,

    /// Debit and credit name the same account
    #[error("debit and credit accounts must differ")]
    SelfTransfer,

    /// Stored bytes do not decode into an account record
    #[error("failed to decode stored record for key {0}")]
    Decode(String),

    /// Storage backend error
    #[error("storage error: {0}")]
    Storage(String),

    /// Invalid user input
    #[error("invalid input: {0}")]
    Validation(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}
