//! Monthly Summary
//!
//! Income, expense and net totals for one calendar month.

use crate::models::{TransactionRecord, YearMonth};

/// Totals for a single month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySummary {
    /// The month the totals cover
    pub period: YearMonth,
    /// Sum of income amounts dated in the month
    pub income: f64,
    /// Sum of expense amounts dated in the month
    pub expense: f64,
}

impl MonthlySummary {
    /// Summarize the records whose timestamp falls in `period`
    ///
    /// Records from other months are ignored entirely.
    pub fn generate(records: &[TransactionRecord], period: YearMonth) -> Self {
        let mut income = 0.0;
        let mut expense = 0.0;

        for record in records.iter().filter(|r| r.month_key() == period) {
            if record.is_income() {
                income += record.amount();
            } else {
                expense += record.amount();
            }
        }

        Self {
            period,
            income,
            expense,
        }
    }

    /// Income minus expense
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}
