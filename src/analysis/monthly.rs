//! Monthly trend buckets

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Money, Transaction, YearMonth};

/// Total amount for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub month: YearMonth,
    pub total: Money,
}

/// Group transactions by calendar month, ascending by date
///
/// Buckets are keyed by [`YearMonth`], whose ordering is chronological, so
/// the result is sorted by real calendar order regardless of input order.
/// Months without transactions do not appear.
pub fn monthly_expenditure(transactions: &[Transaction]) -> Vec<MonthlyBucket> {
    let mut totals: BTreeMap<YearMonth, Money> = BTreeMap::new();

    for txn in transactions {
        *totals.entry(txn.month()).or_default() += txn.amount();
    }

    totals
        .into_iter()
        .map(|(month, total)| MonthlyBucket { month, total })
        .collect()
}
