//! Transaction model
//!
//! A transaction is an immutable, already-validated ledger line: a calendar
//! date, a category name and a signed amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::YearMonth;
use crate::error::{AnalyzerError, AnalyzerResult};

/// A single dated, categorized ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    date: NaiveDate,
    category: String,
    amount: Money,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// The category is trimmed and must not be empty. Category names are
    /// case-sensitive keys: "Food" and "food" are different categories.
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Money) -> AnalyzerResult<Self> {
        let category = category.into();
        let trimmed = category.trim();
        if trimmed.is_empty() {
            return Err(AnalyzerError::Validation(
                "Transaction category cannot be empty".into(),
            ));
        }

        let category = if trimmed.len() == category.len() {
            category
        } else {
            trimmed.to_string()
        };

        Ok(Self {
            date,
            category,
            amount,
        })
    }

    /// Transaction date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Category name
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Amount (positive for spend, negative for refunds)
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Calendar month the transaction falls in
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }

    /// Check if this transaction is a refund
    pub fn is_refund(&self) -> bool {
        self.amount.is_negative()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(date(2023, 1, 5), "Food", Money::from_units(200)).unwrap();

        assert_eq!(txn.date(), date(2023, 1, 5));
        assert_eq!(txn.category(), "Food");
        assert_eq!(txn.amount().cents(), 20000);
        assert_eq!(txn.month(), YearMonth::new(2023, 1).unwrap());
        assert!(!txn.is_refund());
    }

    #[test]
    fn test_category_is_trimmed() {
        let txn = Transaction::new(date(2023, 1, 5), "  Transport ", Money::from_units(1)).unwrap();
        assert_eq!(txn.category(), "Transport");
    }

    #[test]
    fn test_empty_category_rejected() {
        let err = Transaction::new(date(2023, 1, 5), "   ", Money::from_units(1)).unwrap_err();
        assert!(matches!(err, AnalyzerError::Validation(_)));
    }

    #[test]
    fn test_refund() {
        let txn = Transaction::new(date(2023, 1, 5), "Food", Money::from_cents(-500)).unwrap();
        assert!(txn.is_refund());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(date(2023, 2, 1), "Transport", Money::from_units(150)).unwrap();
        assert_eq!(txn.to_string(), "2023-02-01 Transport 150.00");
    }
}
