//! Ledger operation handlers.

use bank_core::{LedgerEngine, StateStore};
use serde_json::json;

use crate::cli::{AccountArgs, InitArgs, TransferArgs};
use crate::output;

pub fn handle_init<S: StateStore>(
    engine: &mut LedgerEngine<S>,
    args: &InitArgs,
    json: bool,
) -> anyhow::Result<()> {
    engine.init(args.opening_balance)?;
    if json {
        output::print_json(&json!({
            "bank": engine.config().bank_name.clone(),
            "opening_balance": args.opening_balance,
        }))?;
    } else {
        println!(
            "initialized {} with balance {}",
            engine.config().bank_name,
            args.opening_balance
        );
    }
    Ok(())
}

pub fn handle_transfer<S: StateStore>(
    engine: &mut LedgerEngine<S>,
    args: &TransferArgs,
    requester: &str,
    json: bool,
) -> anyhow::Result<()> {
    let receipt = engine.transfer(&args.debit, &args.credit, &args.amount, requester)?;
    if json {
        output::print_json(&receipt)?;
    } else {
        output::print_receipt(&receipt);
    }
    Ok(())
}

pub fn handle_delete<S: StateStore>(
    engine: &mut LedgerEngine<S>,
    args: &AccountArgs,
) -> anyhow::Result<()> {
    engine.delete_account(&args.name)?;
    println!("deleted {}", args.name);
    Ok(())
}

pub fn handle_balance<S: StateStore>(
    engine: &LedgerEngine<S>,
    args: &AccountArgs,
    json: bool,
) -> anyhow::Result<()> {
    let view = engine.get_balance(&args.name)?;
    if json {
        output::print_json(&view)?;
    } else {
        output::print_balance(&view);
    }
    Ok(())
}

pub fn handle_daily_usage<S: StateStore>(
    engine: &LedgerEngine<S>,
    args: &AccountArgs,
    json: bool,
) -> anyhow::Result<()> {
    let view = engine.get_daily_usage(&args.name)?;
    if json {
        output::print_json(&view)?;
    } else {
        output::print_daily_usage(&view);
    }
    Ok(())
}

pub fn handle_advance_day<S: StateStore>(
    engine: &mut LedgerEngine<S>,
    json: bool,
) -> anyhow::Result<()> {
    let day = engine.advance_day()?;
    if json {
        output::print_json(&json!({ "day": day }))?;
    } else {
        println!("ledger day is now {}", day);
    }
    Ok(())
}

pub fn handle_accounts<S: StateStore>(
    engine: &LedgerEngine<S>,
    json: bool,
) -> anyhow::Result<()> {
    let names = engine.list_all_accounts()?;
    if json {
        output::print_json(&names)?;
    } else {
        output::print_names(&names);
    }
    Ok(())
}

pub fn handle_my_accounts<S: StateStore>(
    engine: &LedgerEngine<S>,
    requester: &str,
    json: bool,
) -> anyhow::Result<()> {
    let names = engine.list_accounts_by_owner(requester)?;
    if json {
        output::print_json(&names)?;
    } else {
        output::print_names(&names);
    }
    Ok(())
}

pub fn handle_history<S: StateStore>(
    engine: &LedgerEngine<S>,
    args: &AccountArgs,
    json: bool,
) -> anyhow::Result<()> {
    let history = engine.get_history(&args.name)?;
    if json {
        output::print_json(&history)?;
    } else {
        output::print_history(&history);
    }
    Ok(())
}
