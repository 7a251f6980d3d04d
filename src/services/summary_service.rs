//! Pure aggregation over transaction snapshots.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::domain::category;
use crate::domain::transaction::{Transaction, TransactionKind};

/// Overall income/expense totals and their balance.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Totals {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

/// One category's share of total expenses. `percent` is pre-rounded to one
/// decimal, half-up; individual shares may sum to slightly off 100%.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategorySlice {
    pub name: String,
    pub amount: Decimal,
    pub percent: Decimal,
}

/// Expense totals by category display name, largest first, ties in
/// encounter order. Empty whenever there are no expenses.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub entries: Vec<CategorySlice>,
    pub total_expenses: Decimal,
}

/// Income and expense sums for one `YYYY-MM` month.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthlyTrend {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

impl MonthlyTrend {
    pub fn balance(&self) -> Decimal {
        self.income - self.expenses
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Sums incomes and expenses over the snapshot. Empty input yields zeros.
    pub fn totals(transactions: &[Transaction]) -> Totals {
        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => total_income += txn.amount,
                TransactionKind::Expense => total_expenses += txn.amount,
            }
        }
        Totals {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }

    /// Expense totals grouped by category display name, sorted descending by
    /// amount. With zero expenses the breakdown is empty (a no-data
    /// condition, never a division error).
    pub fn by_category(transactions: &[Transaction]) -> CategoryBreakdown {
        let mut sums: Vec<(String, Decimal)> = Vec::new();
        let mut total_expenses = Decimal::ZERO;
        for txn in transactions {
            if txn.kind != TransactionKind::Expense {
                continue;
            }
            let name = category::display_name(&txn.category);
            match sums.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, sum)) => *sum += txn.amount,
                None => sums.push((name, txn.amount)),
            }
            total_expenses += txn.amount;
        }
        if total_expenses == Decimal::ZERO {
            return CategoryBreakdown {
                entries: Vec::new(),
                total_expenses,
            };
        }
        // Stable sort keeps encounter order for equal amounts.
        sums.sort_by(|a, b| b.1.cmp(&a.1));
        let entries = sums
            .into_iter()
            .map(|(name, amount)| CategorySlice {
                name,
                amount,
                percent: percent_of(amount, total_expenses),
            })
            .collect();
        CategoryBreakdown {
            entries,
            total_expenses,
        }
    }

    /// Income/expense sums per `YYYY-MM`, newest month first. The key's
    /// fixed width makes lexicographic descending order chronological.
    pub fn by_month(transactions: &[Transaction]) -> Vec<MonthlyTrend> {
        let mut trends: Vec<MonthlyTrend> = Vec::new();
        for txn in transactions {
            let month = txn.month_key();
            let index = match trends.iter().position(|trend| trend.month == month) {
                Some(index) => index,
                None => {
                    trends.push(MonthlyTrend {
                        month,
                        income: Decimal::ZERO,
                        expenses: Decimal::ZERO,
                    });
                    trends.len() - 1
                }
            };
            match txn.kind {
                TransactionKind::Income => trends[index].income += txn.amount,
                TransactionKind::Expense => trends[index].expenses += txn.amount,
            }
        }
        trends.sort_by(|a, b| b.month.cmp(&a.month));
        trends
    }
}

fn percent_of(amount: Decimal, total: Decimal) -> Decimal {
    (amount / total * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
