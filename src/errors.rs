use thiserror::Error;

use crate::domain::transaction::TransactionKind;

/// Error type that captures persistence transport failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Structured rejection of a transaction draft. Each variant names the field
/// (wire spelling) and carries the offending value where one exists.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("amount `{0}` is not a positive number")]
    InvalidAmount(String),
    #[error("unknown transaction type `{0}`")]
    UnknownKind(String),
    #[error("category `{category}` is not registered for {kind} transactions")]
    UnknownCategory {
        kind: TransactionKind,
        category: String,
    },
    #[error("date `{0}` is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Failures surfaced by mutating operations on the transaction store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid transaction: {0}")]
    Validation(#[from] ValidationError),
    #[error("persistence error: {0}")]
    Storage(#[from] StorageError),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
