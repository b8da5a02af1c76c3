//! Core data models for the bank analyzer
//!
//! This module contains the data structures of the analysis domain:
//! amounts, transactions, calendar months and category budgets.

pub mod budget;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{AlertLevel, Budget, BudgetStatus, APPROACHING_THRESHOLD_PERCENT};
pub use money::{Money, MoneyParseError};
pub use month::{MonthParseError, YearMonth};
pub use transaction::Transaction;
