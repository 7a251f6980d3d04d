//! Owner of the canonical transaction collection and the next-id counter,
//! with write-through persistence after every mutation.

use tracing::{debug, warn};

use crate::domain::transaction::{Transaction, TransactionDraft};
use crate::errors::StoreError;
use crate::storage::KeyValueStore;

/// Key holding the serialized transaction collection.
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Key holding the next-id counter as plain text.
pub const NEXT_ID_KEY: &str = "next-id";

const FIRST_ID: u64 = 1;

/// Single owner of all transaction state. Access is single-threaded and
/// synchronous: each mutation validates, applies, then persists both keys
/// before returning.
pub struct TransactionStore {
    backend: Box<dyn KeyValueStore>,
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl TransactionStore {
    /// Loads persisted state from the backend. Absent, unreadable, or
    /// malformed state degrades to an empty collection with the counter at 1
    /// ("fresh install") instead of failing.
    pub fn open(backend: Box<dyn KeyValueStore>) -> Self {
        let transactions = load_transactions(backend.as_ref());
        let next_id = load_next_id(backend.as_ref(), &transactions);
        debug!(
            count = transactions.len(),
            next_id, "transaction store opened"
        );
        Self {
            backend,
            transactions,
            next_id,
        }
    }

    /// Validates the draft and, on success, appends a new record with the
    /// next identifier and persists the collection and counter together.
    /// A rejected draft leaves the store untouched.
    pub fn add(&mut self, draft: &TransactionDraft) -> Result<Transaction, StoreError> {
        let parts = draft.validate()?;
        let record = Transaction::from_draft(self.next_id, parts);
        self.next_id += 1;
        self.transactions.push(record.clone());
        self.persist()?;
        debug!(id = record.id, kind = %record.kind, "transaction added");
        Ok(record)
    }

    /// Removes the record with the given id if present and persists the
    /// result. Removing an absent id is a no-op, not an error; identifiers
    /// are never handed back out.
    pub fn remove(&mut self, id: u64) -> Result<(), StoreError> {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        if self.transactions.len() < before {
            debug!(id, "transaction removed");
        }
        self.persist()
    }

    /// Read-only snapshot of the current records in insertion order.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Identifier the next added transaction will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Inserts the three demonstration records the original application
    /// ships with, but only into an empty store. Returns whether seeding
    /// happened.
    pub fn seed_sample_data(&mut self) -> Result<bool, StoreError> {
        if !self.transactions.is_empty() {
            return Ok(false);
        }
        let samples = [
            (
                "3000",
                "income",
                "salary",
                "bank-transfer",
                "2025-10-01",
                "Monthly salary",
            ),
            (
                "150.75",
                "expense",
                "groceries",
                "credit-card",
                "2025-10-01",
                "Weekly grocery shopping",
            ),
            (
                "45.20",
                "expense",
                "transportation",
                "debit-card",
                "2025-09-30",
                "Gas fill-up",
            ),
        ];
        for (amount, kind, category, payment_method, date, description) in samples {
            let draft = TransactionDraft {
                amount: amount.into(),
                kind: kind.into(),
                category: category.into(),
                payment_method: payment_method.into(),
                date: date.into(),
                description: description.into(),
            };
            self.add(&draft)?;
        }
        Ok(true)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.transactions)?;
        self.backend.set(TRANSACTIONS_KEY, &json)?;
        self.backend.set(NEXT_ID_KEY, &self.next_id.to_string())?;
        Ok(())
    }
}

fn load_transactions(backend: &dyn KeyValueStore) -> Vec<Transaction> {
    let raw = match backend.get(TRANSACTIONS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(%err, "failed to read persisted transactions; starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(transactions) => transactions,
        Err(err) => {
            warn!(%err, "persisted transactions are malformed; starting empty");
            Vec::new()
        }
    }
}

/// Loads the counter, falling back to 1, then raises it past the highest
/// persisted id so identifiers stay unique even if the counter key was lost.
fn load_next_id(backend: &dyn KeyValueStore, transactions: &[Transaction]) -> u64 {
    let loaded = match backend.get(NEXT_ID_KEY) {
        Ok(Some(raw)) => match raw.trim().parse::<u64>() {
            Ok(value) => value.max(FIRST_ID),
            Err(err) => {
                warn!(%err, "persisted next-id is malformed; resetting");
                FIRST_ID
            }
        },
        Ok(None) => FIRST_ID,
        Err(err) => {
            warn!(%err, "failed to read persisted next-id; resetting");
            FIRST_ID
        }
    };
    let highest = transactions.iter().map(|txn| txn.id).max().unwrap_or(0);
    if loaded <= highest {
        warn!(
            loaded,
            highest, "next-id lagged behind stored records; advancing"
        );
    }
    loaded.max(highest + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use crate::storage::MemoryStore;
    use rust_decimal::Decimal;

    fn expense_draft(amount: &str, date: &str) -> TransactionDraft {
        TransactionDraft {
            amount: amount.into(),
            kind: "expense".into(),
            category: "groceries".into(),
            payment_method: "credit-card".into(),
            date: date.into(),
            description: String::new(),
        }
    }

    fn open_empty() -> TransactionStore {
        TransactionStore::open(Box::new(MemoryStore::new()))
    }

    #[test]
    fn open_defaults_to_fresh_state() {
        let store = open_empty();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn open_survives_malformed_persisted_state() {
        let backend = MemoryStore::new()
            .with_value(TRANSACTIONS_KEY, "{not json")
            .with_value(NEXT_ID_KEY, "three");
        let store = TransactionStore::open(Box::new(backend));
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn ids_increase_and_are_never_recycled() {
        let mut store = open_empty();
        let a = store.add(&expense_draft("10", "2025-01-01")).unwrap();
        let b = store.add(&expense_draft("20", "2025-01-02")).unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.remove(a.id).unwrap();
        let c = store.add(&expense_draft("30", "2025-01-03")).unwrap();
        assert_eq!(c.id, 3, "removed ids must not be reissued");
    }

    #[test]
    fn rejected_draft_leaves_state_untouched() {
        let mut store = open_empty();
        store.add(&expense_draft("10", "2025-01-01")).unwrap();

        let err = store
            .add(&expense_draft("-5", "2025-01-02"))
            .expect_err("negative amount must fail");
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::InvalidAmount(_))
        ));
        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id(), 2);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = open_empty();
        let record = store.add(&expense_draft("10", "2025-01-01")).unwrap();

        store.remove(record.id).unwrap();
        assert!(store.list().iter().all(|txn| txn.id != record.id));

        store.remove(record.id).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn lost_counter_is_advanced_past_stored_ids() {
        let records = serde_json::json!([{
            "id": 5,
            "amount": "12.00",
            "type": "expense",
            "category": "groceries",
            "paymentMethod": "cash",
            "date": "2025-03-01",
            "description": "",
            "timestamp": "2025-03-01T10:00:00Z"
        }]);
        let backend = MemoryStore::new().with_value(TRANSACTIONS_KEY, &records.to_string());
        let mut store = TransactionStore::open(Box::new(backend));
        assert_eq!(store.next_id(), 6);

        let added = store.add(&expense_draft("1", "2025-03-02")).unwrap();
        assert_eq!(added.id, 6);
    }

    #[test]
    fn seed_sample_data_only_fills_an_empty_store() {
        let mut store = open_empty();
        assert!(store.seed_sample_data().unwrap());
        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[0].amount, Decimal::new(3000, 0));

        assert!(!store.seed_sample_data().unwrap());
        assert_eq!(store.len(), 3);
    }
}
