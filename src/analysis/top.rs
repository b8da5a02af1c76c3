//! Largest transactions

use crate::models::Transaction;

/// Number of transactions returned when the caller does not choose
pub const DEFAULT_TOP_COUNT: usize = 5;

/// The `n` transactions with the largest amounts, largest first
///
/// Equal amounts keep their record order. Asking for more than
/// exist returns all of them; asking for zero returns none.
pub fn top_expenses(transactions: &[Transaction], n: usize) -> Vec<&Transaction> {
    if n == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<&Transaction> = transactions.iter().collect();
    // `sort_by` is stable, which gives the record-order tie-break
    ranked.sort_by(|a, b| b.amount().cmp(&a.amount()));
    ranked.truncate(n);
    ranked
}
