//! Display formatting for terminal output
//!
//! Every view renders to a `String` so the subcommands and the interactive
//! menu print identical output.

pub mod budget;
pub mod category;
pub mod overview;
pub mod report;
pub mod transaction;

pub use budget::{format_alert, format_budget_status};
pub use category::{format_category_breakdown, format_category_chart};
pub use overview::{format_load_report, format_monthly, format_overview};
pub use report::{format_money, format_percentage, month_label};
pub use transaction::format_top_expenses;
