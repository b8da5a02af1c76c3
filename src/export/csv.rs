//! CSV export of the category summary

use std::io::Write;

use crate::analysis::CategorySummary;
use crate::error::{AnalyzerError, AnalyzerResult};

/// Header line of the exported report
pub const CSV_HEADER: &str = "Category,Amount";

/// Export category totals to CSV, one row per category in name order
pub fn export_summary_csv<W: Write>(summary: &CategorySummary, writer: &mut W) -> AnalyzerResult<()> {
    writeln!(writer, "{}", CSV_HEADER).map_err(|e| AnalyzerError::Export(e.to_string()))?;

    for row in summary.rows() {
        writeln!(writer, "{},{}", escape_csv(&row.category), row.amount)
            .map_err(|e| AnalyzerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::expenditure_by_category;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;

    fn summary(entries: &[(&str, i64)]) -> CategorySummary {
        let txns: Vec<_> = entries
            .iter()
            .map(|(category, cents)| {
                Transaction::new(
                    NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
                    *category,
                    Money::from_cents(*cents),
                )
                .unwrap()
            })
            .collect();
        expenditure_by_category(&txns)
    }

    #[test]
    fn test_export_summary_csv() {
        let mut output = Vec::new();
        export_summary_csv(
            &summary(&[("Transport", 15000), ("Food", 20000), ("Food", 30050)]),
            &mut output,
        )
        .unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(csv_string, "Category,Amount\nFood,500.50\nTransport,150.00\n");
    }

    #[test]
    fn test_export_empty_summary_writes_header() {
        let mut output = Vec::new();
        export_summary_csv(&CategorySummary::default(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Category,Amount\n");
    }

    #[test]
    fn test_escapes_category_names() {
        let mut output = Vec::new();
        export_summary_csv(&summary(&[("Food, Groceries", 100)]), &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.contains("\"Food, Groceries\",1.00"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
