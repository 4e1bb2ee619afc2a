//! Output formatting helpers for the CLI.

mod json;
mod text;

pub use json::print_json;
pub use text::{print_balance, print_daily_usage, print_history, print_names, print_receipt};
