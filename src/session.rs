//! Analysis session
//!
//! One session owns one record store and one budget ledger. Callers hold the
//! session explicitly and pass it where needed; independent sessions share
//! nothing.

use std::collections::BTreeMap;

use tracing::warn;

use crate::analysis::{self, CategorySummary, MonthlyBucket};
use crate::budget::BudgetLedger;
use crate::error::AnalyzerResult;
use crate::ingest::{load_records, LoadReport, RecordSource, DEFAULT_DATE_FORMAT};
use crate::models::{BudgetStatus, Money, Transaction};
use crate::store::RecordStore;

/// Query engine over a loaded ledger
///
/// Until a load succeeds, every query returns its empty or zero value.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    store: Option<RecordStore>,
    budgets: BudgetLedger,
    date_format: String,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    /// Create an empty session using the default date format
    pub fn new() -> Self {
        Self::with_date_format(DEFAULT_DATE_FORMAT)
    }

    /// Create an empty session with a primary date format for ingestion
    pub fn with_date_format(date_format: impl Into<String>) -> Self {
        Self {
            store: None,
            budgets: BudgetLedger::new(),
            date_format: date_format.into(),
        }
    }

    /// Load transactions from `source`, replacing anything loaded before
    ///
    /// On failure the session holds no data at all. Budgets are kept either
    /// way.
    pub fn load(&mut self, source: &dyn RecordSource) -> AnalyzerResult<LoadReport> {
        match load_records(source, &self.date_format) {
            Ok((store, report)) => {
                self.store = Some(store);
                Ok(report)
            }
            Err(e) => {
                warn!(source = %source.name(), error = %e, "failed to load transactions");
                self.store = None;
                Err(e)
            }
        }
    }

    /// Whether a load has succeeded
    pub fn is_loaded(&self) -> bool {
        self.store.is_some()
    }

    /// The loaded record store, if any
    pub fn store(&self) -> Option<&RecordStore> {
        self.store.as_ref()
    }

    /// Loaded transactions; empty when nothing is loaded
    pub fn records(&self) -> &[Transaction] {
        self.store
            .as_ref()
            .map(RecordStore::transactions)
            .unwrap_or(&[])
    }

    pub fn total_expenditure(&self) -> Money {
        analysis::total_expenditure(self.records())
    }

    pub fn average_expenditure(&self) -> Option<Money> {
        analysis::average_expenditure(self.records())
    }

    pub fn expenditure_by_category(&self) -> CategorySummary {
        analysis::expenditure_by_category(self.records())
    }

    pub fn monthly_expenditure(&self) -> Vec<MonthlyBucket> {
        analysis::monthly_expenditure(self.records())
    }

    pub fn top_expenses(&self, n: usize) -> Vec<&Transaction> {
        analysis::top_expenses(self.records(), n)
    }

    /// Set or overwrite a category's budget; see [`BudgetLedger::set_budget`]
    pub fn set_budget(&mut self, category: &str, limit: Money) -> AnalyzerResult<()> {
        self.budgets.set_budget(category, limit)
    }

    /// Status of every budget against the current category totals
    pub fn budget_status(&self) -> BTreeMap<String, BudgetStatus> {
        self.budgets.status(&self.expenditure_by_category())
    }

    pub fn budgets(&self) -> &BudgetLedger {
        &self.budgets
    }
}
