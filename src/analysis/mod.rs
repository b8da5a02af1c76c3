//! Aggregation over the record store
//!
//! Every function here is pure: it takes a slice of transactions, recomputes
//! from scratch and keeps no state, so calls can be repeated in any order.

pub mod monthly;
pub mod summary;
pub mod top;

pub use monthly::{monthly_expenditure, MonthlyBucket};
pub use summary::{
    average_expenditure, expenditure_by_category, total_expenditure, CategoryRow,
    CategorySummary, ChartSlice,
};
pub use top::{top_expenses, DEFAULT_TOP_COUNT};
