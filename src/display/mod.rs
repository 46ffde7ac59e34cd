//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger records and reports for
//! terminal display.

pub mod report;
pub mod style;
pub mod transaction;

pub use report::{
    format_balance, format_category_summary, format_count, format_header, format_monthly_summary,
};
pub use style::DisplayStyle;
pub use transaction::{format_record_list, format_record_row};
