//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the analysis session.

pub mod budget;
pub mod export;
pub mod menu;
pub mod report;

pub use budget::{handle_budget_command, parse_budget_assignment};
pub use export::{handle_export_command, ExportFormat};
pub use menu::run_menu;
pub use report::{handle_categories, handle_monthly, handle_summary, handle_top};
