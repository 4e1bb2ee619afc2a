//! MPLBANK CLI - dispatch shell for the bank ledger engine.
//!
//! Routes named operations with string arguments to the engine, resolving
//! the caller identity from the supplied credential first. The CLI provides
//! no isolation between concurrent invocations; the engine's serialization
//! contract is the operator's responsibility.

use std::path::Path;

use clap::Parser;

use bank_core::{IdentityResolver, LedgerEngine, SqliteStore, SubjectNameResolver};

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Completions(args) = &cli.command {
        return commands::handle_completions(args.shell);
    }

    // Identity resolution is total: a missing or unparsable credential
    // degrades to the empty identity and fails ownership checks later.
    let resolver = SubjectNameResolver::new();
    let requester = resolver.resolve(cli.identity.as_deref().unwrap_or("").as_bytes());

    let store = SqliteStore::open(Path::new(&cli.store))?;
    let mut engine = LedgerEngine::new(store);

    match &cli.command {
        Commands::Init(args) => commands::handle_init(&mut engine, args, cli.json),
        Commands::Transfer(args) => {
            commands::handle_transfer(&mut engine, args, &requester, cli.json)
        }
        Commands::Delete(args) => commands::handle_delete(&mut engine, args),
        Commands::Balance(args) => commands::handle_balance(&engine, args, cli.json),
        Commands::DailyUsage(args) => commands::handle_daily_usage(&engine, args, cli.json),
        Commands::AdvanceDay => commands::handle_advance_day(&mut engine, cli.json),
        Commands::Accounts => commands::handle_accounts(&engine, cli.json),
        Commands::MyAccounts => commands::handle_my_accounts(&engine, &requester, cli.json),
        Commands::History(args) => commands::handle_history(&engine, args, cli.json),
        Commands::Completions(_) => unreachable!("handled above"),
    }
}
