use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use bank_core::VERSION;

/// MPLBANK - a minimal bank ledger with ownership-checked transfers
#[derive(Parser)]
#[command(name = "mplbank")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger database
    #[arg(short, long, global = true, env = "MPLBANK_STORE", default_value = "mplbank.db")]
    pub store: String,

    /// Caller credential (subject line, e.g. "CN=alice,O=MPL")
    #[arg(short, long, global = true, env = "MPLBANK_IDENTITY")]
    pub identity: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Opening balance for the bank account
    #[arg(value_name = "BALANCE")]
    pub opening_balance: u64,
}

/// Arguments for the `transfer` command
#[derive(Args)]
pub struct TransferArgs {
    /// Account to debit
    #[arg(value_name = "DEBIT")]
    pub debit: String,

    /// Account to credit (opened on first bank transfer)
    #[arg(value_name = "CREDIT")]
    pub credit: String,

    /// Amount to move, in units
    #[arg(value_name = "AMOUNT")]
    pub amount: String,
}

/// Arguments for commands that name a single account
#[derive(Args)]
pub struct AccountArgs {
    /// Account name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the bank account and the day counter
    Init(InitArgs),

    /// Move units between accounts
    Transfer(TransferArgs),

    /// Remove an account key (administrative, no safety checks)
    Delete(AccountArgs),

    /// Show an account's current balance
    Balance(AccountArgs),

    /// Show an account's cumulative debits for the current ledger day
    DailyUsage(AccountArgs),

    /// Advance the global ledger day by one
    AdvanceDay,

    /// List all account names (bank excluded)
    Accounts,

    /// List accounts owned by the caller
    MyAccounts,

    /// Show an account's balance at every past version
    History(AccountArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
