pub mod category;
pub mod transaction;

pub use transaction::{Transaction, TransactionDraft, TransactionKind, ValidatedDraft};
