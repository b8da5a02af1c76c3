//! Overall and monthly spending views

use super::report::{format_money, month_label, separator};
use crate::analysis::MonthlyBucket;
use crate::ingest::LoadReport;
use crate::models::Money;

/// Format total and average spend
pub fn format_overview(
    count: usize,
    total: Money,
    average: Option<Money>,
    symbol: &str,
) -> String {
    let Some(average) = average else {
        return "No transactions found.\n".to_string();
    };

    let mut output = String::new();
    output.push_str("Overall Spending\n");
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!("Transactions:        {}\n", count));
    output.push_str(&format!("Total expenditure:   {}\n", format_money(total, symbol)));
    output.push_str(&format!("Average transaction: {}\n", format_money(average, symbol)));
    output
}

/// Format monthly totals in chronological order
pub fn format_monthly(buckets: &[MonthlyBucket], symbol: &str) -> String {
    if buckets.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Monthly Spending\n");
    output.push_str(&separator(40));
    output.push('\n');

    for bucket in buckets {
        output.push_str(&format!(
            "{:18} {:>21}\n",
            month_label(bucket.month),
            format_money(bucket.total, symbol)
        ));
    }

    output
}

/// One-line summary of a load, mentioning dropped rows when there are any
pub fn format_load_report(report: &LoadReport) -> String {
    if report.rejected.is_empty() {
        format!(
            "Loaded {} transactions from {}",
            report.loaded, report.source_name
        )
    } else {
        format!(
            "Loaded {} transactions from {} ({} malformed rows skipped)",
            report.loaded,
            report.source_name,
            report.rejected_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{RejectedRow, RowRejection};
    use crate::models::YearMonth;

    #[test]
    fn test_format_overview() {
        let output = format_overview(
            3,
            Money::from_units(650),
            Some(Money::from_cents(21666)),
            "EGP",
        );
        assert!(output.contains("Total expenditure:   650.00 EGP"));
        assert!(output.contains("Average transaction: 216.66 EGP"));
        assert!(output.contains("Transactions:        3"));
    }

    #[test]
    fn test_format_overview_empty() {
        let output = format_overview(0, Money::zero(), None, "EGP");
        assert_eq!(output, "No transactions found.\n");
    }

    #[test]
    fn test_format_monthly_labels() {
        let buckets = vec![
            MonthlyBucket {
                month: YearMonth::new(2019, 12).unwrap(),
                total: Money::from_units(20),
            },
            MonthlyBucket {
                month: YearMonth::new(2023, 1).unwrap(),
                total: Money::from_units(1500),
            },
        ];

        let output = format_monthly(&buckets, "EGP");
        assert!(output.find("December 2019").unwrap() < output.find("January 2023").unwrap());
        assert!(output.contains("1,500.00 EGP"));
    }

    #[test]
    fn test_format_load_report() {
        let mut report = LoadReport {
            source_name: "bank_data.csv".into(),
            loaded: 3,
            rejected: Vec::new(),
        };
        assert_eq!(
            format_load_report(&report),
            "Loaded 3 transactions from bank_data.csv"
        );

        report.rejected.push(RejectedRow {
            row_number: 4,
            reason: RowRejection::MissingField("Amount"),
        });
        assert!(format_load_report(&report).ends_with("(1 malformed rows skipped)"));
    }
}
