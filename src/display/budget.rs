//! Budget status display formatting

use std::collections::BTreeMap;

use super::report::{format_money, format_percentage, truncate};
use crate::models::{AlertLevel, BudgetStatus};

/// Format the status of every budget, followed by any alerts
pub fn format_budget_status(statuses: &BTreeMap<String, BudgetStatus>, symbol: &str) -> String {
    if statuses.is_empty() {
        return "No budgets have been set yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:18} {:>16} {:>16} {:>16} {:>7}  {}\n",
        "Category", "Limit", "Spent", "Remaining", "Used", "Status"
    ));
    output.push_str(&"-".repeat(90));
    output.push('\n');

    for (category, status) in statuses {
        output.push_str(&format!(
            "{:18} {:>16} {:>16} {:>16} {:>7}  {}\n",
            truncate(category, 18),
            format_money(status.limit, symbol),
            format_money(status.spent, symbol),
            format_money(status.remaining, symbol),
            format_percentage(status.percentage),
            status.alert()
        ));
    }

    let alerts: Vec<String> = statuses
        .iter()
        .filter_map(|(category, status)| format_alert(category, status, symbol))
        .collect();

    if !alerts.is_empty() {
        output.push('\n');
        for alert in alerts {
            output.push_str(&alert);
            output.push('\n');
        }
    }

    output
}

/// One-line alert for a budget that needs attention
pub fn format_alert(category: &str, status: &BudgetStatus, symbol: &str) -> Option<String> {
    match status.alert() {
        AlertLevel::Normal => None,
        AlertLevel::Approaching => Some(format!(
            "⚠ {} is approaching its budget ({} used)",
            category,
            format_percentage(status.percentage)
        )),
        AlertLevel::OverBudget => Some(format!(
            "✗ {} is over budget by {}",
            category,
            format_money(-status.remaining, symbol)
        )),
    }
}
