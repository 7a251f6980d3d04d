//! Predicate filtering and filter-option discovery over snapshots.

use serde::Serialize;

use crate::domain::transaction::{Transaction, TransactionKind};

/// Conjunction of optional criteria. Omitted or empty criteria impose no
/// constraint; `month` matches on the `YYYY-MM` prefix of the date.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub month: Option<String>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && active(&self.category).is_none() && active(&self.month).is_none()
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category) = active(&self.category) {
            if txn.category != category {
                return false;
            }
        }
        if let Some(month) = active(&self.month) {
            if !txn.date.format("%Y-%m-%d").to_string().starts_with(month) {
                return false;
            }
        }
        true
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

/// Distinct filter values currently present in the store: categories in
/// first-encounter order, months sorted newest first. Recomputed on demand;
/// the scan is linear and cheap, so nothing is cached.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub months: Vec<String>,
}

pub struct FilterService;

impl FilterService {
    /// Subset matching every provided criterion, preserving input order.
    pub fn filter<'a>(
        transactions: &'a [Transaction],
        filter: &TransactionFilter,
    ) -> Vec<&'a Transaction> {
        transactions.iter().filter(|txn| filter.matches(txn)).collect()
    }

    /// Orders a selection by date descending for display. The sort is stable,
    /// so same-day records keep their relative order.
    pub fn sort_for_display<'a>(mut selection: Vec<&'a Transaction>) -> Vec<&'a Transaction> {
        selection.sort_by(|a, b| b.date.cmp(&a.date));
        selection
    }

    /// Discovers the filterable values present in the snapshot.
    pub fn options(transactions: &[Transaction]) -> FilterOptions {
        let mut categories: Vec<String> = Vec::new();
        let mut months: Vec<String> = Vec::new();
        for txn in transactions {
            if !categories.iter().any(|known| *known == txn.category) {
                categories.push(txn.category.clone());
            }
            let month = txn.month_key();
            if !months.iter().any(|known| *known == month) {
                months.push(month);
            }
        }
        months.sort_by(|a, b| b.cmp(a));
        FilterOptions { categories, months }
    }
}
