//! Typed key namespace for the state store.
//!
//! The store holds three kinds of keys in one flat lexical space: account
//! records, owner-index entries, and the global day counter. Each kind gets
//! its own single-byte prefix so enumeration can filter on the typed prefix
//! instead of pattern-matching serialized content.

use crate::error::{LedgerError, Result};

const ACCOUNT_PREFIX: &str = "a:";
const INDEX_PREFIX: &str = "i:";
const COUNTER_PREFIX: &str = "c:";

/// Separator between the components of a composite index key.
///
/// U+0000 cannot appear in account or owner names (rejected at validation),
/// so splitting is unambiguous.
const SEPARATOR: char = '\u{0}';

/// A key in the ledger's state store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateKey {
    /// Current serialized record of one account.
    Account(String),
    /// Sentinel entry mapping (owner, account) for owner enumeration.
    OwnerIndex { owner: String, account: String },
    /// The single global day counter.
    DayCounter,
}

impl StateKey {
    pub fn account(name: impl Into<String>) -> Self {
        StateKey::Account(name.into())
    }

    pub fn owner_index(owner: impl Into<String>, account: impl Into<String>) -> Self {
        StateKey::OwnerIndex {
            owner: owner.into(),
            account: account.into(),
        }
    }

    /// Stable string encoding used as the physical store key.
    pub fn encode(&self) -> String {
        match self {
            StateKey::Account(name) => format!("{ACCOUNT_PREFIX}{name}"),
            StateKey::OwnerIndex { owner, account } => {
                format!("{INDEX_PREFIX}{owner}{SEPARATOR}{account}")
            }
            StateKey::DayCounter => format!("{COUNTER_PREFIX}day"),
        }
    }

    /// Parse a physical store key back into its typed form.
    pub fn parse(raw: &str) -> Result<Self> {
        if let Some(name) = raw.strip_prefix(ACCOUNT_PREFIX) {
            return Ok(StateKey::Account(name.to_string()));
        }
        if let Some(rest) = raw.strip_prefix(INDEX_PREFIX) {
            let (owner, account) = rest
                .split_once(SEPARATOR)
                .ok_or_else(|| LedgerError::Decode(raw.to_string()))?;
            return Ok(StateKey::OwnerIndex {
                owner: owner.to_string(),
                account: account.to_string(),
            });
        }
        if raw == StateKey::DayCounter.encode() {
            return Ok(StateKey::DayCounter);
        }
        Err(LedgerError::Decode(raw.to_string()))
    }

    /// Half-open scan range `[start, end)` covering every account key.
    ///
    /// `;` is the byte after `:`, so the range is exactly the `a:` prefix.
    pub fn account_range() -> (String, String) {
        (ACCOUNT_PREFIX.to_string(), "a;".to_string())
    }

    /// Half-open scan range covering all index entries for one owner.
    ///
    /// The end bound swaps the U+0000 separator for U+0001, the next code
    /// point, so the range is exactly this owner's entries.
    pub fn owner_index_range(owner: &str) -> (String, String) {
        let start = format!("{INDEX_PREFIX}{owner}{SEPARATOR}");
        let end = format!("{INDEX_PREFIX}{owner}\u{1}");
        (start, end)
    }
}

/// Reject names that would break key encoding or composite splitting.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(LedgerError::Validation(
            "account name must not be empty".to_string(),
        ));
    }
    if name.contains(SEPARATOR) {
        return Err(LedgerError::Validation(
            "account name contains a reserved character".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_key_round_trip() {
        let key = StateKey::account("MPLBANK");
        assert_eq!(key.encode(), "a:MPLBANK");
        assert_eq!(StateKey::parse("a:MPLBANK").unwrap(), key);
    }

    #[test]
    fn test_owner_index_key_round_trip() {
        let key = StateKey::owner_index("alice", "X");
        let raw = key.encode();
        assert!(raw.starts_with("i:alice"));
        assert_eq!(StateKey::parse(&raw).unwrap(), key);
    }

    #[test]
    fn test_day_counter_key() {
        assert_eq!(StateKey::DayCounter.encode(), "c:day");
        assert_eq!(StateKey::parse("c:day").unwrap(), StateKey::DayCounter);
    }

    #[test]
    fn test_parse_rejects_unknown_prefix() {
        assert!(StateKey::parse("z:whatever").is_err());
        assert!(StateKey::parse("i:missing-separator").is_err());
    }

    #[test]
    fn test_account_range_covers_only_accounts() {
        let (start, end) = StateKey::account_range();
        let account = StateKey::account("X").encode();
        let index = StateKey::owner_index("alice", "X").encode();
        let counter = StateKey::DayCounter.encode();

        assert!(account.as_str() >= start.as_str() && account.as_str() < end.as_str());
        assert!(!(index.as_str() >= start.as_str() && index.as_str() < end.as_str()));
        assert!(!(counter.as_str() >= start.as_str() && counter.as_str() < end.as_str()));
    }

    #[test]
    fn test_owner_index_range_isolates_owner() {
        let (start, end) = StateKey::owner_index_range("alice");
        let mine = StateKey::owner_index("alice", "X").encode();
        // "alicex" shares the plain-text prefix but is a different owner.
        let other = StateKey::owner_index("alicex", "X").encode();

        assert!(mine.as_str() >= start.as_str() && mine.as_str() < end.as_str());
        assert!(!(other.as_str() >= start.as_str() && other.as_str() < end.as_str()));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("X").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("bad\u{0}name").is_err());
    }
}
