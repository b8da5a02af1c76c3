//! YAML export of the category summary

use std::io::Write;

use crate::analysis::CategorySummary;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::export::json::SummaryExport;

/// Export category totals to YAML
pub fn export_summary_yaml<W: Write>(summary: &CategorySummary, writer: &mut W) -> AnalyzerResult<()> {
    let export = SummaryExport::from_summary(summary);

    writeln!(writer, "# Bank Analyzer Spending Summary")
        .map_err(|e| AnalyzerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| AnalyzerError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in cents").map_err(|e| AnalyzerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AnalyzerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AnalyzerError::Export(e.to_string()))?;

    Ok(())
}
