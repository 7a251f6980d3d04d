//! Domain types representing recorded income and expenses.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::category;
use crate::errors::ValidationError;

/// A single recorded movement of money, immutable once created.
///
/// Amounts are always stored positive; the direction is carried by `kind`.
/// Instances are only minted by the store's add operation, which assigns the
/// identifier and creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub payment_method: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn from_draft(id: u64, parts: ValidatedDraft) -> Self {
        Self {
            id,
            amount: parts.amount,
            kind: parts.kind,
            category: parts.category,
            payment_method: parts.payment_method,
            date: parts.date,
            description: parts.description,
            timestamp: Utc::now(),
        }
    }

    /// `YYYY-MM` grouping key derived from the calendar date.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Amount with the sign implied by the transaction kind.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(ValidationError::UnknownKind(value.to_string())),
        }
    }
}

/// Unvalidated field set proposed by a form collaborator. Every field arrives
/// as text; `validate` turns it into typed parts or a structured error.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub amount: String,
    pub kind: String,
    pub category: String,
    pub payment_method: String,
    pub date: String,
    pub description: String,
}

/// Well-typed outcome of draft validation, still lacking the identifier and
/// timestamp assigned by the store.
#[derive(Debug, Clone)]
pub struct ValidatedDraft {
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: String,
    pub payment_method: String,
    pub date: NaiveDate,
    pub description: String,
}

impl TransactionDraft {
    /// Checks every required field and produces the typed parts of a record.
    ///
    /// A transaction type outside income/expense is rejected rather than
    /// defaulted, and the category must belong to the registry list for the
    /// resolved kind.
    pub fn validate(&self) -> Result<ValidatedDraft, ValidationError> {
        let amount_raw = required(&self.amount, "amount")?;
        let kind_raw = required(&self.kind, "type")?;
        let category_raw = required(&self.category, "category")?;
        let method_raw = required(&self.payment_method, "paymentMethod")?;
        let date_raw = required(&self.date, "date")?;

        let amount = amount_raw
            .parse::<Decimal>()
            .ok()
            .filter(|value| *value > Decimal::ZERO)
            .ok_or_else(|| ValidationError::InvalidAmount(amount_raw.to_string()))?;
        let kind = kind_raw.parse::<TransactionKind>()?;
        let category_slug = category::slugify(category_raw);
        if !category::is_registered(kind, &category_slug) {
            return Err(ValidationError::UnknownCategory {
                kind,
                category: category_slug,
            });
        }
        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date_raw.to_string()))?;

        Ok(ValidatedDraft {
            amount,
            kind,
            category: category_slug,
            payment_method: category::slugify(method_raw),
            date,
            description: self.description.trim().to_string(),
        })
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TransactionDraft {
        TransactionDraft {
            amount: "150.75".into(),
            kind: "expense".into(),
            category: "groceries".into(),
            payment_method: "credit-card".into(),
            date: "2025-10-01".into(),
            description: "Weekly grocery shopping".into(),
        }
    }

    #[test]
    fn validate_accepts_complete_draft() {
        let parts = draft().validate().expect("valid draft");
        assert_eq!(parts.amount, Decimal::new(15075, 2));
        assert_eq!(parts.kind, TransactionKind::Expense);
        assert_eq!(parts.category, "groceries");
        assert_eq!(parts.date, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        let mut missing = draft();
        missing.payment_method = "  ".into();
        let err = missing.validate().expect_err("blank field must fail");
        assert_eq!(err, ValidationError::MissingField("paymentMethod"));
    }

    #[test]
    fn validate_rejects_non_positive_amounts() {
        for bad in ["0", "-12.50", "abc", "1.2.3"] {
            let mut invalid = draft();
            invalid.amount = bad.into();
            let err = invalid.validate().expect_err("amount must fail");
            assert!(
                matches!(err, ValidationError::InvalidAmount(_)),
                "unexpected error for `{bad}`: {err:?}"
            );
        }
    }

    #[test]
    fn validate_rejects_unknown_kind_instead_of_defaulting() {
        let mut invalid = draft();
        invalid.kind = "transfer".into();
        let err = invalid.validate().expect_err("unknown kind must fail");
        assert_eq!(err, ValidationError::UnknownKind("transfer".into()));
    }

    #[test]
    fn validate_rejects_category_from_the_wrong_kind() {
        let mut invalid = draft();
        invalid.kind = "income".into();
        // groceries is an expense category, not an income one
        let err = invalid.validate().expect_err("category must fail");
        assert!(matches!(err, ValidationError::UnknownCategory { .. }));
    }

    #[test]
    fn validate_rejects_malformed_dates() {
        let mut invalid = draft();
        invalid.date = "2025-13-40".into();
        let err = invalid.validate().expect_err("date must fail");
        assert_eq!(err, ValidationError::InvalidDate("2025-13-40".into()));
    }

    #[test]
    fn serialized_records_use_wire_field_names() {
        let record = Transaction {
            id: 7,
            amount: Decimal::new(4520, 2),
            kind: TransactionKind::Expense,
            category: "transportation".into(),
            payment_method: "debit-card".into(),
            date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
            description: String::new(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["paymentMethod"], "debit-card");
        assert_eq!(json["date"], "2025-09-30");
    }

    #[test]
    fn month_key_truncates_to_year_and_month() {
        let record = Transaction {
            id: 1,
            amount: Decimal::ONE,
            kind: TransactionKind::Income,
            category: "salary".into(),
            payment_method: "bank-transfer".into(),
            date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            description: String::new(),
            timestamp: Utc::now(),
        };
        assert_eq!(record.month_key(), "2025-10");
        assert_eq!(record.signed_amount(), Decimal::ONE);
    }
}
