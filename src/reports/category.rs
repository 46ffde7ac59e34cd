//! Category Summary
//!
//! Accumulated amounts per category, kept separately for income and expense.

use std::collections::BTreeMap;

use crate::models::TransactionRecord;

/// Per-category totals, split by kind
///
/// A category that only has expenses never appears in `income`, and the
/// other way around. Maps are ordered by category name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySummary {
    pub income: BTreeMap<String, f64>,
    pub expense: BTreeMap<String, f64>,
}

impl CategorySummary {
    pub fn generate(records: &[TransactionRecord]) -> Self {
        let mut summary = Self::default();

        for record in records {
            let totals = if record.is_income() {
                &mut summary.income
            } else {
                &mut summary.expense
            };
            *totals.entry(record.category().to_string()).or_insert(0.0) += record.amount();
        }

        summary
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expense.is_empty()
    }
}
