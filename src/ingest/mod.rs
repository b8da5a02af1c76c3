//! Ingestion: reading raw rows from a source and validating them
//!
//! Loading is best-effort. A source that cannot be read at all fails the whole
//! load; a malformed row is dropped and recorded in the [`LoadReport`], and the
//! load carries on with the next row.

pub mod csv_source;
pub mod validate;

use tracing::{debug, info};

use crate::error::AnalyzerResult;
use crate::store::RecordStore;

pub use csv_source::{read_csv, ColumnMapping, CsvSource};
pub use validate::{parse_amount, parse_date, validate_row, RawRecord, RowRejection};

/// Default primary date format for ingestion
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Anything that can produce raw transaction rows
pub trait RecordSource {
    /// Human-readable identifier used in errors and logs
    fn name(&self) -> String;

    /// Read every row
    ///
    /// Returns `Err` only when the source as a whole is unreadable.
    fn read_records(&self) -> AnalyzerResult<Vec<Result<RawRecord, RowRejection>>>;
}

impl RecordSource for Vec<RawRecord> {
    fn name(&self) -> String {
        "in-memory records".to_string()
    }

    fn read_records(&self) -> AnalyzerResult<Vec<Result<RawRecord, RowRejection>>> {
        Ok(self.iter().cloned().map(Ok).collect())
    }
}

/// A row excluded from the record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// Row position in the source (0 when unknown)
    pub row_number: usize,
    pub reason: RowRejection,
}

/// Outcome of a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Source identifier
    pub source_name: String,
    /// Number of rows accepted into the record store
    pub loaded: usize,
    /// Rows that failed validation, in source order
    pub rejected: Vec<RejectedRow>,
}

impl LoadReport {
    /// Number of rows dropped
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Total rows seen in the source
    pub fn total_rows(&self) -> usize {
        self.loaded + self.rejected.len()
    }
}

/// Read and validate every row of `source` into a new record store
pub fn load_records(
    source: &dyn RecordSource,
    date_format: &str,
) -> AnalyzerResult<(RecordStore, LoadReport)> {
    let source_name = source.name();
    let rows = source.read_records()?;

    let mut transactions = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();

    for row in rows {
        let rejection = match row {
            Ok(raw) => match validate_row(&raw, date_format) {
                Ok(txn) => {
                    transactions.push(txn);
                    continue;
                }
                Err(reason) => RejectedRow {
                    row_number: raw.row_number,
                    reason,
                },
            },
            Err(reason) => RejectedRow {
                row_number: 0,
                reason,
            },
        };

        debug!(
            source = %source_name,
            row_number = rejection.row_number,
            reason = %rejection.reason,
            "dropping row"
        );
        rejected.push(rejection);
    }

    info!(
        source = %source_name,
        loaded = transactions.len(),
        rejected = rejected.len(),
        "transactions loaded"
    );

    let report = LoadReport {
        source_name,
        loaded: transactions.len(),
        rejected,
    };

    Ok((RecordStore::new(transactions), report))
}
