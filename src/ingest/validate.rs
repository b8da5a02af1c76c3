//! Row validation and normalization
//!
//! Turns a [`RawRecord`] into a [`Transaction`] or a [`RowRejection`] that says
//! why the row was dropped.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::models::{Money, Transaction};

/// Date formats tried after the configured primary format
const FALLBACK_DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%m-%d-%Y", "%d-%m-%Y",
];

/// Date-time formats whose date part is kept
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Currency symbols stripped from amounts
const CURRENCY_SYMBOLS: [char; 4] = ['$', '£', '€', '¥'];

/// An unvalidated row as read from a transaction source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Position of the row in its source, for diagnostics
    pub row_number: usize,
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
}

impl RawRecord {
    /// Create a record with all three fields present
    pub fn new(
        row_number: usize,
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            row_number,
            date: Some(date.into()),
            category: Some(category.into()),
            amount: Some(amount.into()),
        }
    }
}

/// Why a row was excluded from the record store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("could not parse date '{0}'")]
    InvalidDate(String),

    #[error("could not parse amount '{0}'")]
    InvalidAmount(String),

    #[error("unreadable row: {0}")]
    Unreadable(String),
}

/// Validate a raw row
///
/// `date_format` is tried first, then a fixed list of common formats.
pub fn validate_row(record: &RawRecord, date_format: &str) -> Result<Transaction, RowRejection> {
    let date = required(&record.date, "Date")?;
    let category = required(&record.category, "Category")?;
    let amount = required(&record.amount, "Amount")?;

    let date = parse_date(date, date_format)?;
    let amount = parse_amount(amount)?;

    Transaction::new(date, category, amount).map_err(|_| RowRejection::MissingField("Category"))
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, RowRejection> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(RowRejection::MissingField(name))
}

/// Parse a date string using the primary format and then common alternatives
pub fn parse_date(s: &str, primary_format: &str) -> Result<NaiveDate, RowRejection> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, primary_format) {
        return Ok(date);
    }

    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(datetime.date());
        }
    }

    Err(RowRejection::InvalidDate(s.to_string()))
}

/// Parse an amount string, handling currency symbols, thousands separators
/// and accounting-style parentheses for negatives
pub fn parse_amount(s: &str) -> Result<Money, RowRejection> {
    let invalid = || RowRejection::InvalidAmount(s.trim().to_string());
    let trimmed = s.trim();

    let (parenthesized, inner) = match trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => (true, inner.trim()),
        None => (false, trimmed),
    };

    let (negative, unsigned) = match inner.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, inner.strip_prefix('+').map_or(inner, str::trim_start)),
    };

    let cleaned: String = unsigned
        .trim_start_matches(&CURRENCY_SYMBOLS[..])
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.starts_with(&['-', '+'][..]) {
        return Err(invalid());
    }

    let amount = Money::parse(&cleaned).map_err(|_| invalid())?;

    if parenthesized || negative {
        Ok(-amount)
    } else {
        Ok(amount)
    }
}
