//! Budget model
//!
//! A budget is a spending limit for one category. Its status is always derived
//! fresh from the current category totals and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Spend at or above this share of the limit (and not over it) is "approaching"
pub const APPROACHING_THRESHOLD_PERCENT: i64 = 80;

/// A spending limit for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// The category this budget applies to
    pub category: String,

    /// Spending limit, always greater than zero
    pub limit: Money,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }

        Ok(())
    }

    /// Compute the status of this budget against a category's spend
    pub fn status(&self, spent: Money) -> BudgetStatus {
        BudgetStatus::new(self.limit, spent)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: limit {}", self.category, self.limit)
    }
}

/// Spend-versus-limit figures for one budgeted category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    /// The budget limit
    pub limit: Money,

    /// Total spend in the category (zero when it has no transactions)
    pub spent: Money,

    /// `limit - spent`; negative once the budget is exceeded
    pub remaining: Money,

    /// `spent / limit * 100`
    pub percentage: f64,

    /// `spent > limit`
    pub over_budget: bool,
}

impl BudgetStatus {
    /// Derive the status figures for a limit and spend
    ///
    /// `limit` must be positive; the ledger enforces this when budgets are set.
    pub fn new(limit: Money, spent: Money) -> Self {
        let percentage = if limit.is_zero() {
            0.0
        } else {
            spent.cents() as f64 * 100.0 / limit.cents() as f64
        };

        Self {
            limit,
            spent,
            remaining: limit - spent,
            percentage,
            over_budget: spent > limit,
        }
    }

    /// Classify this status for alerting
    pub fn alert(&self) -> AlertLevel {
        AlertLevel::classify(self.spent, self.limit)
    }
}

/// Alert classification of a budget status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    /// Spend below 80% of the limit
    Normal,
    /// Spend between 80% and 100% of the limit, both inclusive
    Approaching,
    /// Spend above the limit
    OverBudget,
}

impl AlertLevel {
    /// Classify spend against a limit
    ///
    /// Uses exact integer arithmetic on cents, so spend of exactly 80% of the
    /// limit is `Approaching`.
    pub fn classify(spent: Money, limit: Money) -> Self {
        if spent > limit {
            Self::OverBudget
        } else if 100 * i128::from(spent.cents())
            >= i128::from(APPROACHING_THRESHOLD_PERCENT) * i128::from(limit.cents())
        {
            Self::Approaching
        } else {
            Self::Normal
        }
    }

    /// Whether this level should be surfaced to the user
    pub fn is_alert(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Approaching => write!(f, "APPROACHING"),
            Self::OverBudget => write!(f, "OVER_BUDGET"),
        }
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be greater than zero, got {}", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
