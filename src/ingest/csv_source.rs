//! CSV transaction source
//!
//! Reads `Date,Category,Amount` ledgers. Columns are located by header name,
//! so extra columns and any column order are accepted.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};

use super::validate::{RawRecord, RowRejection};
use super::RecordSource;
use crate::error::{AnalyzerError, AnalyzerResult};

/// Column positions of the required fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date_column: usize,
    pub category_column: usize,
    pub amount_column: usize,
}

impl ColumnMapping {
    /// Detect the column mapping from a CSV header record
    ///
    /// Matching is case-insensitive; the first header containing "date",
    /// "category" or "amount" wins for each field.
    pub fn detect(headers: &StringRecord) -> Result<Self, &'static str> {
        let mut date_column = None;
        let mut category_column = None;
        let mut amount_column = None;

        for (idx, header) in headers.iter().enumerate() {
            let h = header.trim().to_lowercase();

            if h.contains("date") && date_column.is_none() {
                date_column = Some(idx);
            } else if h.contains("category") && category_column.is_none() {
                category_column = Some(idx);
            } else if h.contains("amount") && amount_column.is_none() {
                amount_column = Some(idx);
            }
        }

        Ok(Self {
            date_column: date_column.ok_or("Date")?,
            category_column: category_column.ok_or("Category")?,
            amount_column: amount_column.ok_or("Amount")?,
        })
    }

    fn extract(&self, record: &StringRecord, row_number: usize) -> RawRecord {
        let field = |idx: usize| record.get(idx).map(str::to_string);
        RawRecord {
            row_number,
            date: field(self.date_column),
            category: field(self.category_column),
            amount: field(self.amount_column),
        }
    }
}

/// A CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Create a source for the CSV file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_records(&self) -> AnalyzerResult<Vec<Result<RawRecord, RowRejection>>> {
        let file = File::open(&self.path)
            .map_err(|e| AnalyzerError::source_unavailable(self.name(), e.to_string()))?;
        read_csv(file, &self.name())
    }
}

/// Read raw records from any CSV reader
///
/// Fails as a whole only when the header is unreadable or lacks a required
/// column. Individual bad records come back as [`RowRejection::Unreadable`].
pub fn read_csv<R: Read>(
    reader: R,
    source_name: &str,
) -> AnalyzerResult<Vec<Result<RawRecord, RowRejection>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AnalyzerError::source_unavailable(source_name, e.to_string()))?
        .clone();

    let mapping = ColumnMapping::detect(&headers).map_err(|column| {
        AnalyzerError::source_unavailable(
            source_name,
            format!("missing required column '{}'", column),
        )
    })?;

    let mut results = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // Header is line 1, so the first data row is line 2
        let fallback_line = idx + 2;
        match result {
            Ok(record) => {
                let row_number = record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(fallback_line);
                results.push(Ok(mapping.extract(&record, row_number)));
            }
            Err(e) => results.push(Err(RowRejection::Unreadable(e.to_string()))),
        }
    }

    Ok(results)
}
