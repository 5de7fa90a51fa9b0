//! Transaction display formatting
//!
//! Provides utilities for formatting transaction listings and forecast
//! summaries for terminal display.

use crate::models::Transaction;
use crate::reports::ForecastReport;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{:>6} {} {:20} {:7} {:>12}",
        txn.id,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.category, 20),
        txn.kind.to_string(),
        txn.amount.to_string()
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6} {:10} {:20} {:7} {:>12}\n",
        "ID", "Date", "Category", "Type", "Amount"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Format a forecast report for display
pub fn format_forecast(report: &ForecastReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Predicted expense for next month: ${:.2}\n",
        report.predicted_expense
    ));
    output.push_str(&format!(
        "Total expense to date:            ${:.2}\n",
        report.total_expense
    ));

    if report.over_budget {
        output.push_str("Warning: you are likely to exceed your budget next month!\n");
    }

    output
}

/// Truncate a string to a maximum length, adding an ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionType, UserId};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            TransactionId::new(3),
            UserId::new(1),
            "Groceries",
            Money::from_cents(5000),
            TransactionType::Expense,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_register_contains_rows_and_header() {
        let register = format_transaction_register(&[sample()]);

        assert!(register.contains("Date"));
        assert!(register.contains("2025-01-15"));
        assert!(register.contains("Groceries"));
        assert!(register.contains("$50.00"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_transaction_register(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_forecast_warning_only_when_over() {
        let calm = ForecastReport {
            predicted_expense: 100.0,
            total_expense: 100.0,
            over_budget: false,
        };
        assert!(!format_forecast(&calm).contains("Warning"));

        let over = ForecastReport {
            predicted_expense: 130.0,
            total_expense: 100.0,
            over_budget: true,
        };
        assert!(format_forecast(&over).contains("Warning"));
    }

    #[test]
    fn test_truncate_long_category() {
        let row = format_transaction_row(&Transaction::new(
            TransactionId::new(1),
            UserId::new(1),
            "An unreasonably long category name",
            Money::from_cents(100),
            TransactionType::Expense,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        ));
        assert!(row.contains('…'));
    }
}
