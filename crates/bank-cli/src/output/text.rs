//! Plain-text output formatting.

use bank_core::{BalanceAtVersion, BalanceView, DailyUsageView, TransferReceipt};

pub fn print_balance(view: &BalanceView) {
    println!("{}: {}", view.name, view.balance);
}

pub fn print_daily_usage(view: &DailyUsageView) {
    println!("{}: {} transferred today", view.name, view.total_for_day);
}

pub fn print_receipt(receipt: &TransferReceipt) {
    println!(
        "ok (debit balance {}, credit balance {}, total for day {})",
        receipt.debit_balance, receipt.credit_balance, receipt.total_for_day
    );
}

pub fn print_names(names: &[String]) {
    for name in names {
        println!("{}", name);
    }
}

pub fn print_history(history: &[BalanceAtVersion]) {
    for version in history {
        println!("{}  {}", version.tx_id, version.balance);
    }
}
