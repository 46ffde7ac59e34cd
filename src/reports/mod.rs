//! Reports module for the finance tracker
//!
//! Pure aggregations over an in-memory ledger: balance, record count,
//! monthly totals and per-category totals. None of them mutate their input.

pub mod category;
pub mod monthly;
pub mod totals;

pub use category::CategorySummary;
pub use monthly::MonthlySummary;
pub use totals::{balance, count};
