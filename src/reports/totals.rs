//! Ledger-wide totals
//!
//! Balance and record count over the whole ledger. Sums are accumulated in
//! ledger order so floating-point results are reproducible.

use crate::models::TransactionRecord;

/// Income minus expense across every record; zero for an empty ledger
pub fn balance(records: &[TransactionRecord]) -> f64 {
    records.iter().fold(0.0, |acc, r| {
        if r.is_income() {
            acc + r.amount()
        } else {
            acc - r.amount()
        }
    })
}

/// Number of records regardless of kind
pub fn count(records: &[TransactionRecord]) -> usize {
    records.len()
}
