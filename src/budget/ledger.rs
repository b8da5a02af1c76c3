//! Per-category spending limits and their status

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::analysis::CategorySummary;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{Budget, BudgetStatus, Money};

/// Holds one limit per category
///
/// A budget may be set for a category that has no transactions yet; its
/// status then reports zero spend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetLedger {
    limits: BTreeMap<String, Money>,
}

impl BudgetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the limit for a category
    ///
    /// A limit of zero or less is rejected and any existing limit for the
    /// category is left as it was.
    pub fn set_budget(&mut self, category: &str, limit: Money) -> AnalyzerResult<()> {
        let category = category.trim();
        if category.is_empty() {
            warn!(limit = %limit, "rejecting budget with empty category");
            return Err(AnalyzerError::Validation(
                "Budget category cannot be empty".into(),
            ));
        }

        let budget = Budget::new(category, limit);

        if budget.validate().is_err() {
            warn!(category = %category, limit = %limit, "rejecting non-positive budget");
            return Err(AnalyzerError::InvalidBudget {
                category: budget.category,
                limit,
            });
        }

        debug!(category = %category, limit = %limit, "budget set");
        self.limits.insert(budget.category, budget.limit);
        Ok(())
    }

    /// The limit for a category, if one has been set
    pub fn limit(&self, category: &str) -> Option<Money> {
        self.limits.get(category).copied()
    }

    /// All budgets, in category-name order
    pub fn budgets(&self) -> Vec<Budget> {
        self.limits
            .iter()
            .map(|(category, limit)| Budget::new(category.as_str(), *limit))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Status of every budgeted category against the given spend
    ///
    /// Computed fresh on each call; categories missing from `summary`
    /// count as zero spend.
    pub fn status(&self, summary: &CategorySummary) -> BTreeMap<String, BudgetStatus> {
        self.limits
            .iter()
            .map(|(category, limit)| {
                let status = BudgetStatus::new(*limit, summary.spent(category));
                (category.clone(), status)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::expenditure_by_category;
    use crate::models::{AlertLevel, Transaction};
    use chrono::NaiveDate;

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    fn spend(entries: &[(&str, i64)]) -> CategorySummary {
        let txns: Vec<_> = entries
            .iter()
            .map(|(category, amount)| {
                Transaction::new(
                    NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
                    *category,
                    units(*amount),
                )
                .unwrap()
            })
            .collect();
        expenditure_by_category(&txns)
    }

    #[test]
    fn test_set_budget_overwrites() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", units(500)).unwrap();
        ledger.set_budget("Food", units(300)).unwrap();

        assert_eq!(ledger.limit("Food"), Some(units(300)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_non_positive_limits_rejected() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", units(500)).unwrap();

        let err = ledger.set_budget("Food", Money::zero()).unwrap_err();
        assert!(err.is_invalid_budget());
        let err = ledger.set_budget("Food", units(-50)).unwrap_err();
        assert!(err.is_invalid_budget());

        assert_eq!(ledger.limit("Food"), Some(units(500)));
    }

    #[test]
    fn test_rejected_limit_does_not_create_budget() {
        let mut ledger = BudgetLedger::new();
        assert!(ledger.set_budget("Food", units(-1)).is_err());
        assert!(ledger.is_empty());
        assert!(ledger.limit("Food").is_none());
    }

    #[test]
    fn test_status_at_threshold() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", units(500)).unwrap();

        let status = ledger.status(&spend(&[("Food", 150), ("Food", 250), ("Transport", 90)]));
        let food = status["Food"];

        assert_eq!(food.spent, units(400));
        assert_eq!(food.remaining, units(100));
        assert_eq!(food.percentage, 80.0);
        assert!(!food.over_budget);
        assert_eq!(food.alert(), AlertLevel::Approaching);
        assert!(!status.contains_key("Transport"));
    }

    #[test]
    fn test_status_over_budget() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Food", units(500)).unwrap();

        let food = ledger.status(&spend(&[("Food", 600)]))["Food"];
        assert!(food.over_budget);
        assert_eq!(food.remaining, units(-100));
        assert_eq!(food.alert(), AlertLevel::OverBudget);
    }

    #[test]
    fn test_budget_without_spend() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget("Travel", units(1000)).unwrap();

        let travel = ledger.status(&CategorySummary::default())["Travel"];
        assert_eq!(travel.spent, Money::zero());
        assert_eq!(travel.remaining, units(1000));
        assert_eq!(travel.percentage, 0.0);
        assert_eq!(travel.alert(), AlertLevel::Normal);
    }

    #[test]
    fn test_status_reflects_latest_limit() {
        let mut ledger = BudgetLedger::new();
        let summary = spend(&[("Food", 400)]);

        ledger.set_budget("Food", units(1000)).unwrap();
        assert_eq!(ledger.status(&summary)["Food"].alert(), AlertLevel::Normal);

        ledger.set_budget("Food", units(300)).unwrap();
        assert_eq!(ledger.status(&summary)["Food"].alert(), AlertLevel::OverBudget);
    }

    #[test]
    fn test_category_is_trimmed() {
        let mut ledger = BudgetLedger::new();
        ledger.set_budget(" Food ", units(500)).unwrap();

        assert_eq!(ledger.limit("Food"), Some(units(500)));
        assert_eq!(ledger.limit(" Food "), None);

        let status = ledger.status(&spend(&[("Food", 400)]));
        assert_eq!(status.len(), 1);
        assert_eq!(status["Food"].spent, units(400));
        assert_eq!(status["Food"].alert(), AlertLevel::Approaching);
    }

    #[test]
    fn test_blank_category_rejected() {
        let mut ledger = BudgetLedger::new();

        assert!(ledger.set_budget("   ", units(500)).is_err());
        assert!(ledger.set_budget("", units(500)).is_err());
        assert!(ledger.budgets().is_empty());
    }

    #[test]
    fn test_empty_ledger_has_empty_status() {
        let ledger = BudgetLedger::new();
        assert!(ledger.status(&spend(&[("Food", 10)])).is_empty());
        assert!(ledger.budgets().is_empty());
    }
}
