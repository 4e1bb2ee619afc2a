//! The account ledger engine.
//!
//! All durable state lives in the store; the engine itself is stateless
//! between calls. Operations are synchronous and never retried. The transfer
//! path performs an unguarded read-modify-write across two keys, so the
//! embedding host must serialize invocations — interleaved transfers against
//! the same debit account can otherwise overdraw it (demonstrated in the
//! integration tests).

use tracing::{debug, info, warn};

use crate::error::{LedgerError, Result};
use crate::model::{Account, BalanceAtVersion, BalanceView, DailyUsageView, TransferReceipt, BANK_NAME};
use crate::store::{validate_name, StateKey, StateStore};

/// Engine parameters. Defaults match the deployed ledger.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Reserved name of the bank account.
    pub bank_name: String,
    /// Identity recorded as the bank account's owner at init.
    pub bank_owner: String,
    /// Maximum cumulative debit per account per ledger day. The boundary is
    /// inclusive: a day total of exactly `daily_cap` is allowed.
    pub daily_cap: u64,
    /// Maximum amount the bank may use to fund a newly opened account.
    pub opening_ceiling: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bank_name: BANK_NAME.to_string(),
            bank_owner: "jyg".to_string(),
            daily_cap: 1000,
            opening_ceiling: 10_000,
        }
    }
}

/// Outcome of the credit-side lookup during a transfer.
enum CreditSide {
    /// Credit key was absent; the bank is opening this account.
    Opened(Account),
    /// Credit account already exists.
    Existing(Account),
}

/// Account ledger engine over a state store.
pub struct LedgerEngine<S: StateStore> {
    store: S,
    config: EngineConfig,
}

impl<S: StateStore> LedgerEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create the bank account and the day counter. One-shot.
    pub fn init(&mut self, opening_balance: u64) -> Result<()> {
        if self.load_account(&self.config.bank_name)?.is_some() {
            return Err(LedgerError::Validation(
                "ledger already initialized".to_string(),
            ));
        }

        let bank = Account {
            name: self.config.bank_name.clone(),
            current_balance: opening_balance,
            total_for_day: 0,
            current_day: 0,
            owner: self.config.bank_owner.clone(),
        };
        self.write_account(&bank)?;
        self.store.put(&StateKey::DayCounter.encode(), b"0")?;

        info!(bank = %bank.name, opening_balance, "ledger initialized");
        Ok(())
    }

    /// Move `amount` units from `debit` to `credit` on behalf of `requester`.
    ///
    /// The amount arrives in textual form, as supplied by the dispatch
    /// layer. Both the daily-cap and sufficiency checks run against
    /// pre-transfer values; nothing is written unless every check passes.
    pub fn transfer(
        &mut self,
        debit: &str,
        credit: &str,
        amount_text: &str,
        requester: &str,
    ) -> Result<TransferReceipt> {
        validate_name(debit)?;
        validate_name(credit)?;
        if debit == credit {
            return Err(LedgerError::SelfTransfer);
        }
        let amount: u64 = amount_text
            .trim()
            .parse()
            .map_err(|_| LedgerError::InvalidAmount)?;

        let mut debit_account = self
            .load_account(debit)?
            .ok_or_else(|| LedgerError::NotFound(debit.to_string()))?;
        let debit_is_bank = debit_account.name == self.config.bank_name;

        if !debit_is_bank && debit_account.owner != requester {
            warn!(debit, requester, "ownership check failed");
            return Err(LedgerError::NotOwner);
        }

        let global_day = self.read_day()?;
        debit_account.total_for_day = debit_account.effective_total_for_day(global_day);
        debit_account.current_day = global_day;

        // Decision table over {debit-is-bank, credit-present}.
        let credit_side = match self.load_account(credit)? {
            None if debit_is_bank => {
                if amount > self.config.opening_ceiling {
                    return Err(LedgerError::OpeningCeilingExceeded);
                }
                debug!(credit, owner = requester, "opening account");
                CreditSide::Opened(Account::open(credit, global_day, requester))
            }
            None => return Err(LedgerError::OnlyBankMayOpen),
            Some(_) if debit_is_bank => {
                return Err(LedgerError::AlreadyFunded(credit.to_string()))
            }
            Some(account) => CreditSide::Existing(account),
        };

        let exceeds_cap = debit_account
            .total_for_day
            .checked_add(amount)
            .map_or(true, |total| total > self.config.daily_cap);
        if !debit_is_bank && exceeds_cap {
            return Err(LedgerError::DailyCapExceeded);
        }
        if amount > debit_account.current_balance {
            return Err(LedgerError::InsufficientFunds);
        }

        debit_account.total_for_day += amount;
        debit_account.current_balance -= amount;

        let (mut credit_account, opened) = match credit_side {
            CreditSide::Opened(account) => (account, true),
            CreditSide::Existing(account) => (account, false),
        };
        credit_account.current_balance = credit_account
            .current_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Validation("credit balance overflow".to_string()))?;

        if opened {
            let index_key = StateKey::owner_index(requester, credit).encode();
            self.store.put(&index_key, &[0u8])?;
        }
        self.write_account(&debit_account)?;
        self.write_account(&credit_account)?;

        info!(
            debit,
            credit,
            amount,
            debit_balance = debit_account.current_balance,
            credit_balance = credit_account.current_balance,
            "transfer applied"
        );

        Ok(TransferReceipt {
            debit_balance: debit_account.current_balance,
            credit_balance: credit_account.current_balance,
            total_for_day: debit_account.total_for_day,
        })
    }

    /// Current balance of an account.
    pub fn get_balance(&self, name: &str) -> Result<BalanceView> {
        let account = self
            .load_account(name)?
            .ok_or_else(|| LedgerError::NotFound(name.to_string()))?;
        Ok(BalanceView {
            name: account.name,
            balance: account.current_balance,
        })
    }

    /// Daily total of an account with the lazy reset applied.
    ///
    /// Purely observational: a stale total reads as zero but the stored
    /// record keeps its old value.
    pub fn get_daily_usage(&self, name: &str) -> Result<DailyUsageView> {
        let account = self
            .load_account(name)?
            .ok_or_else(|| LedgerError::NotFound(name.to_string()))?;
        let global_day = self.read_day()?;
        let total_for_day = account.effective_total_for_day(global_day);
        Ok(DailyUsageView {
            name: account.name,
            total_for_day,
        })
    }

    /// Increment and persist the global day counter. No per-account writes;
    /// stale daily totals reset lazily wherever a record is next read.
    pub fn advance_day(&mut self) -> Result<u64> {
        let day = self.read_day()? + 1;
        self.store
            .put(&StateKey::DayCounter.encode(), day.to_string().as_bytes())?;
        info!(day, "ledger day advanced");
        Ok(day)
    }

    /// Names of all accounts except the bank, in store key order.
    pub fn list_all_accounts(&self) -> Result<Vec<String>> {
        let (start, end) = StateKey::account_range();
        let mut names = Vec::new();
        for (raw, _) in self.store.range_scan(&start, &end)? {
            if let StateKey::Account(name) = StateKey::parse(&raw)? {
                if name != self.config.bank_name {
                    names.push(name);
                }
            }
        }
        Ok(names)
    }

    /// Names of all accounts opened for the given owner, in store key order.
    pub fn list_accounts_by_owner(&self, owner: &str) -> Result<Vec<String>> {
        let (start, end) = StateKey::owner_index_range(owner);
        let mut names = Vec::new();
        for (raw, _) in self.store.range_scan(&start, &end)? {
            if let StateKey::OwnerIndex { account, .. } = StateKey::parse(&raw)? {
                names.push(account);
            }
        }
        Ok(names)
    }

    /// Balance at every past version of an account, oldest first.
    ///
    /// A decode failure on any snapshot fails the whole query.
    pub fn get_history(&self, name: &str) -> Result<Vec<BalanceAtVersion>> {
        let key = StateKey::account(name).encode();
        let versions = self.store.history(&key)?;
        if versions.is_empty() {
            return Err(LedgerError::NotFound(name.to_string()));
        }

        versions
            .into_iter()
            .map(|version| {
                let account: Account = serde_json::from_slice(&version.value)
                    .map_err(|_| LedgerError::Decode(name.to_string()))?;
                Ok(BalanceAtVersion {
                    tx_id: version.tx_id,
                    balance: account.current_balance,
                })
            })
            .collect()
    }

    /// Remove an account key unconditionally. Administrative escape hatch;
    /// no ownership check, no index cleanup.
    pub fn delete_account(&mut self, name: &str) -> Result<()> {
        self.store.delete(&StateKey::account(name).encode())
    }

    fn load_account(&self, name: &str) -> Result<Option<Account>> {
        let key = StateKey::account(name).encode();
        match self.store.get(&key)? {
            None => Ok(None),
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|_| LedgerError::Decode(name.to_string())),
        }
    }

    fn write_account(&mut self, account: &Account) -> Result<String> {
        let bytes = serde_json::to_vec(account)
            .map_err(|e| LedgerError::Storage(e.to_string()))?;
        self.store
            .put(&StateKey::account(&account.name).encode(), &bytes)
    }

    /// Current global day. Missing or malformed counter reads as zero.
    fn read_day(&self) -> Result<u64> {
        match self.store.get(&StateKey::DayCounter.encode())? {
            Some(bytes) => Ok(std::str::from_utf8(&bytes)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(0)),
            None => Ok(0),
        }
    }
}
