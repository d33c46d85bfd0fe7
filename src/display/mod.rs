//! Display formatting for terminal output
//!
//! Turns report rows into text: currency and duration strings, tabled
//! tables, and lightly styled summaries.

pub mod category;
pub mod dashboard;
pub mod format;
pub mod transaction;

pub use category::{format_cut, format_fixed_table, format_monthly_table};
pub use dashboard::{format_dashboard, format_totals};
pub use format::{
    color_enabled, format_amount, format_currency, format_money, format_percent,
    format_relative_days,
};
pub use transaction::format_transaction_table;
