//! Category summary export
//!
//! Writes the per-category totals in two-column form to any writer:
//! - CSV: `Category,Amount` rows, spreadsheet-compatible
//! - JSON: the same rows plus a total, machine-readable
//! - YAML: the JSON document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_summary_csv;
pub use json::{export_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;
