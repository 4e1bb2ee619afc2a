//! Command handlers. Each handler routes one operation to the engine and
//! renders the result.

mod ledger;
mod misc;

pub use ledger::{
    handle_accounts, handle_advance_day, handle_balance, handle_daily_usage, handle_delete,
    handle_history, handle_init, handle_my_accounts, handle_transfer,
};
pub use misc::handle_completions;
