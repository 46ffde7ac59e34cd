//! Report formatting utilities for terminal output
//!
//! Renders balance, count, monthly and category summaries.

use crate::reports::{CategorySummary, MonthlySummary};

use super::style::DisplayStyle;

/// Format a section header (`--- Title ---`)
pub fn format_header(title: &str) -> String {
    format!("--- {} ---", title)
}

pub fn format_balance(balance: f64, style: &DisplayStyle) -> String {
    format!("Current Balance: {}", style.money(balance))
}

pub fn format_count(count: usize) -> String {
    format!("Total Transactions Recorded: {}", count)
}

/// Format a monthly summary, headed by the upper-case month name
pub fn format_monthly_summary(summary: &MonthlySummary, style: &DisplayStyle) -> String {
    let title = format!(
        "Summary for {} {}",
        summary.period.month_name().to_uppercase(),
        summary.period.year()
    );

    format!(
        "{}\nTotal Income:  {}\nTotal Expense: {}\nNet Savings:   {}\n",
        format_header(&title),
        style.money(summary.income),
        style.money(summary.expense),
        style.money(summary.net())
    )
}

/// Format per-category totals, income section first
pub fn format_category_summary(summary: &CategorySummary, style: &DisplayStyle) -> String {
    if summary.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = format_header("Category-wise Summary");
    output.push('\n');

    for (label, totals) in [
        ("Income Categories:", &summary.income),
        ("Expense Categories:", &summary.expense),
    ] {
        output.push('\n');
        output.push_str(label);
        output.push('\n');
        for (category, amount) in totals {
            output.push_str(&format!("  {:<15} : {}\n", category, style.money(*amount)));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionKind, TransactionRecord, YearMonth};

    #[test]
    fn test_monthly_summary_text() {
        let summary = MonthlySummary {
            period: YearMonth::new(2025, 5).unwrap(),
            income: 50000.0,
            expense: 1200.0,
        };
        let text = format_monthly_summary(&summary, &DisplayStyle::default());

        assert!(text.starts_with("--- Summary for MAY 2025 ---\n"));
        assert!(text.contains("Total Income:  Rs.50000.00"));
        assert!(text.contains("Total Expense: Rs.1200.00"));
        assert!(text.contains("Net Savings:   Rs.48800.00"));
    }

    #[test]
    fn test_category_summary_text() {
        let records = vec![
            TransactionRecord::new(TransactionKind::Income, "Salary", 50000.0, ""),
            TransactionRecord::new(TransactionKind::Expense, "Food", 1200.0, ""),
        ];
        let text =
            format_category_summary(&CategorySummary::generate(&records), &DisplayStyle::default());

        let income_at = text.find("Income Categories:").unwrap();
        let expense_at = text.find("Expense Categories:").unwrap();
        let salary_at = text.find("Salary").unwrap();
        let food_at = text.find("Food").unwrap();
        assert!(income_at < salary_at && salary_at < expense_at && expense_at < food_at);
        assert!(text.contains("  Food            : Rs.1200.00"));
    }

    #[test]
    fn test_empty_category_summary() {
        let text = format_category_summary(&CategorySummary::default(), &DisplayStyle::default());
        assert_eq!(text, "No transactions found.\n");
    }

    #[test]
    fn test_balance_and_count() {
        assert_eq!(
            format_balance(48800.0, &DisplayStyle::default()),
            "Current Balance: Rs.48800.00"
        );
        assert_eq!(format_count(2), "Total Transactions Recorded: 2");
    }
}
