//! Transaction display formatting
//!
//! Formats ledger records as fixed-width rows for the "View All" listing.

use crate::models::TransactionRecord;

use super::style::DisplayStyle;

/// Format a single record as a register row
pub fn format_record_row(record: &TransactionRecord, style: &DisplayStyle) -> String {
    format!(
        "{:<8} | {:<10} | {}{:<10.2} | {:<20} | {}",
        record.kind(),
        record.category(),
        style.currency_symbol,
        record.amount(),
        style.timestamp(record.timestamp()),
        record.description()
    )
}

/// Format all records, one row per line, in ledger order
pub fn format_record_list(records: &[TransactionRecord], style: &DisplayStyle) -> String {
    if records.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::from("--- All Transactions ---\n");
    for record in records {
        output.push_str(&format_record_row(record, style));
        output.push('\n');
    }
    output
}
