//! In-memory record store
//!
//! Holds the validated transactions of one analysis session. The store is
//! filled once at load time and read-only afterwards; every query re-groups or
//! re-sorts as it needs, so insertion order carries no meaning beyond being
//! the tie-breaker for equal amounts in top-N queries.

use chrono::NaiveDate;

use crate::models::Transaction;

/// An ordered collection of validated transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    transactions: Vec<Transaction>,
}

impl RecordStore {
    /// Create a store from already-validated transactions
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// All transactions, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Earliest and latest transaction dates, if any
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let earliest = self.transactions.iter().map(Transaction::date).min()?;
        let latest = self.transactions.iter().map(Transaction::date).max()?;
        Some((earliest, latest))
    }

    /// Distinct category names, sorted
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transactions.iter().map(Transaction::category).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
