//! Bank Analyzer - transaction ledger analysis with category budgets
//!
//! This library loads a ledger of dated, categorized transactions and answers
//! analytical queries over it: totals, category breakdowns, monthly trends,
//! top-N outliers and budget-versus-actual tracking.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, months, budgets)
//! - `ingest`: Reading and validating raw rows
//! - `store`: The in-memory record store
//! - `analysis`: Pure aggregation over the record store
//! - `budget`: Per-category limits and their status
//! - `session`: One loaded ledger plus its budgets
//! - `export`: Category summary export (CSV, JSON, YAML)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use bank_analyzer::ingest::CsvSource;
//! use bank_analyzer::session::AnalysisSession;
//!
//! let mut session = AnalysisSession::new();
//! session.load(&CsvSource::new("bank_data.csv"))?;
//! println!("Total: {}", session.total_expenditure());
//! # Ok::<(), bank_analyzer::AnalyzerError>(())
//! ```

pub mod analysis;
pub mod budget;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ingest;
pub mod models;
pub mod session;
pub mod store;
pub mod utils;

pub use error::{AnalyzerError, AnalyzerResult};
pub use session::AnalysisSession;
