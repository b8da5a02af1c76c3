//! Totals and category breakdowns

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Money, Transaction};

/// Sum of all transaction amounts; zero for an empty slice
pub fn total_expenditure(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::amount).sum()
}

/// Mean transaction amount, rounded toward zero to the cent
///
/// Returns `None` when there are no transactions.
pub fn average_expenditure(transactions: &[Transaction]) -> Option<Money> {
    if transactions.is_empty() {
        return None;
    }
    let total = total_expenditure(transactions);
    Some(Money::from_cents(total.cents() / transactions.len() as i64))
}

/// Group-by-category sum in a single pass
pub fn expenditure_by_category(transactions: &[Transaction]) -> CategorySummary {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();

    for txn in transactions {
        *totals.entry(txn.category().to_string()).or_default() += txn.amount();
    }

    CategorySummary(totals)
}

/// Mapping from category name to total amount
///
/// Only categories that appear in at least one transaction are present.
/// Iteration is in category-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySummary(BTreeMap<String, Money>);

impl CategorySummary {
    /// Total for a category, if it has any transactions
    pub fn get(&self, category: &str) -> Option<Money> {
        self.0.get(category).copied()
    }

    /// Total for a category, treating an absent category as zero spend
    pub fn spent(&self, category: &str) -> Money {
        self.get(category).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of every category total
    pub fn total(&self) -> Money {
        self.0.values().sum()
    }

    /// Categories sorted by amount, largest first; equal amounts by name
    pub fn ranked(&self) -> Vec<(&str, Money)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Category with the largest total
    pub fn highest(&self) -> Option<(&str, Money)> {
        self.ranked().first().copied()
    }

    /// Category with the smallest total
    pub fn lowest(&self) -> Option<(&str, Money)> {
        self.iter().min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
    }

    /// Two-column (category, amount) rows for tabular export
    pub fn rows(&self) -> Vec<CategoryRow> {
        self.iter()
            .map(|(category, amount)| CategoryRow {
                category: category.to_string(),
                amount,
            })
            .collect()
    }

    /// Data for bar or pie presentation, largest share first
    ///
    /// Shares are relative to the sum of positive totals, so refunds never
    /// produce negative slices. Categories whose net total is not positive
    /// are left out.
    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        let positive_total: i128 = self
            .iter()
            .map(|(_, amount)| i128::from(amount.cents()))
            .filter(|cents| *cents > 0)
            .sum();

        self.ranked()
            .into_iter()
            .filter(|(_, amount)| amount.is_positive())
            .map(|(category, amount)| ChartSlice {
                category: category.to_string(),
                amount,
                share_percent: if positive_total == 0 {
                    0.0
                } else {
                    amount.cents() as f64 * 100.0 / positive_total as f64
                },
            })
            .collect()
    }
}

/// One exported category line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: String,
    pub amount: Money,
}

/// One slice of a category chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub category: String,
    pub amount: Money,
    /// Share of all positive spend, 0-100
    pub share_percent: f64,
}
