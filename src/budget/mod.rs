//! Budget tracking
//!
//! Budgets live only for the current session; nothing here touches disk.

pub mod ledger;

pub use ledger::BudgetLedger;
