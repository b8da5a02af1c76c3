//! Category breakdown display formatting

use super::report::{format_bar, format_money, format_percentage, separator, truncate};
use crate::analysis::CategorySummary;

const CHART_WIDTH: usize = 30;

/// Format category totals, largest first, with the highest and lowest
/// spending categories called out
pub fn format_category_breakdown(summary: &CategorySummary, symbol: &str) -> String {
    if summary.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Spending by Category\n");
    output.push_str(&separator(42));
    output.push('\n');

    for (category, amount) in summary.ranked() {
        output.push_str(&format!(
            "{:22} {:>19}\n",
            truncate(category, 22),
            format_money(amount, symbol)
        ));
    }

    output.push_str(&separator(42));
    output.push('\n');

    if let Some((category, amount)) = summary.highest() {
        output.push_str(&format!(
            "Highest spending: {} ({})\n",
            category,
            format_money(amount, symbol)
        ));
    }
    if let Some((category, amount)) = summary.lowest() {
        output.push_str(&format!(
            "Lowest spending:  {} ({})\n",
            category,
            format_money(amount, symbol)
        ));
    }

    output
}

/// Horizontal text bar chart of each category's share of spend
pub fn format_category_chart(summary: &CategorySummary) -> String {
    let slices = summary.chart_slices();
    if slices.is_empty() {
        return "No spending to chart.\n".to_string();
    }

    let max_share = slices
        .iter()
        .map(|s| s.share_percent)
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    for slice in &slices {
        output.push_str(&format!(
            "{:18} {} {:>6}\n",
            truncate(&slice.category, 18),
            format_bar(slice.share_percent, max_share, CHART_WIDTH),
            format_percentage(slice.share_percent)
        ));
    }

    output
}
