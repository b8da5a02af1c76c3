//! JSON export of the category summary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::analysis::{CategoryRow, CategorySummary};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::Money;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported category report
///
/// Amounts are serialized as integer cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// One row per category, in name order
    pub categories: Vec<CategoryRow>,

    /// Sum of all category amounts
    pub total: Money,
}

impl SummaryExport {
    /// Build an export document from category totals
    pub fn from_summary(summary: &CategorySummary) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories: summary.rows(),
            total: summary.total(),
        }
    }
}

/// Export category totals to JSON
pub fn export_summary_json<W: Write>(
    summary: &CategorySummary,
    writer: &mut W,
    pretty: bool,
) -> AnalyzerResult<()> {
    let export = SummaryExport::from_summary(summary);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| AnalyzerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| AnalyzerError::Export(e.to_string()))?;
    Ok(())
}
