//! Transaction display formatting

use super::report::{format_money, truncate};
use crate::models::Transaction;

/// Format a single transaction as a table row
pub fn format_transaction_row(rank: usize, txn: &Transaction, symbol: &str) -> String {
    format!(
        "{:>3}  {}  {:20} {:>18}",
        rank,
        txn.date().format("%Y-%m-%d"),
        truncate(txn.category(), 20),
        format_money(txn.amount(), symbol)
    )
}

/// Format the largest transactions, largest first
pub fn format_top_expenses(transactions: &[&Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Top {} Expenses\n", transactions.len()));
    output.push_str(&format!(
        "{:>3}  {:10}  {:20} {:>18}\n",
        "#", "Date", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');

    for (idx, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(idx + 1, txn, symbol));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn txn(day: u32, category: &str, amount: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            category,
            Money::from_units(amount),
        )
        .unwrap()
    }

    #[test]
    fn test_format_transaction_row() {
        let row = format_transaction_row(1, &txn(20, "Food", 300), "EGP");
        assert!(row.contains("2023-01-20"));
        assert!(row.contains("Food"));
        assert!(row.ends_with("300.00 EGP"));
    }

    #[test]
    fn test_format_top_expenses() {
        let a = txn(20, "Food", 300);
        let b = txn(5, "Food", 200);
        let output = format_top_expenses(&[&a, &b], "EGP");

        assert!(output.starts_with("Top 2 Expenses"));
        let first = output.find("300.00 EGP").unwrap();
        let second = output.find("200.00 EGP").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_format_empty_top_expenses() {
        assert_eq!(format_top_expenses(&[], "EGP"), "No transactions found.\n");
    }
}
