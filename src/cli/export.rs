//! CLI commands for report export

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analysis::CategorySummary;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::export::{export_summary_csv, export_summary_json, export_summary_yaml};
use crate::session::AnalysisSession;

/// Default report file name used by the interactive menu
pub const DEFAULT_REPORT_FILE: &str = "spending_summary_report.csv";

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV with a `Category,Amount` header
    Csv,
    /// JSON document with a total
    Json,
    /// YAML document with a total
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension, defaulting to CSV
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Csv,
        }
    }
}

/// Write the category summary to `output` in the given format
pub fn export_to_path(
    summary: &CategorySummary,
    output: &Path,
    format: ExportFormat,
) -> AnalyzerResult<()> {
    let file = File::create(output).map_err(|e| {
        AnalyzerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_summary_csv(summary, &mut writer)?,
        ExportFormat::Json => export_summary_json(summary, &mut writer, true)?,
        ExportFormat::Yaml => export_summary_yaml(summary, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| AnalyzerError::Export(e.to_string()))
}

/// Handle the `export` command
pub fn handle_export_command(
    session: &AnalysisSession,
    output: &Path,
    format: Option<ExportFormat>,
) -> AnalyzerResult<()> {
    let format = format.unwrap_or_else(|| ExportFormat::from_path(output));
    let summary = session.expenditure_by_category();

    export_to_path(&summary, output, format)?;
    println!(
        "Exported {} categories to: {}",
        summary.len(),
        output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::RawRecord;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("report.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("report.JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("report.yml")), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_path(Path::new("report")), ExportFormat::Csv);
    }

    #[test]
    fn test_export_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join(DEFAULT_REPORT_FILE);

        let mut session = AnalysisSession::new();
        session
            .load(&vec![
                RawRecord::new(2, "2023-01-05", "Food", "200"),
                RawRecord::new(3, "2023-02-01", "Transport", "150"),
            ])
            .unwrap();

        handle_export_command(&session, &output, None).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents, "Category,Amount\nFood,200.00\nTransport,150.00\n");
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("missing").join("report.csv");

        let err = export_to_path(&CategorySummary::default(), &output, ExportFormat::Csv)
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::Export(_)));
    }
}
