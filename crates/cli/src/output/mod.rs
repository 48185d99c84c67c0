//! Output formatting for CLI results.

pub mod transaction;

pub use transaction::{format_transaction_json, format_transaction_table, DepositSummary};
