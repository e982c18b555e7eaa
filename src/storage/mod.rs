//! Key-value persistence for the transaction and goal collections.

pub mod json_backend;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::errors::{BudgetError, Result};

pub use json_backend::JsonFileBackend;
pub use memory::MemoryBackend;

pub const TRANSACTIONS_KEY: &str = "budgetTrackerTransactions";
pub const GOALS_KEY: &str = "budgetTrackerGoals";

/// String key-value backend the store serializes collections onto.
pub trait KeyValueBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Loads and saves whole ordered collections as JSON arrays.
pub struct Store {
    backend: Box<dyn KeyValueBackend>,
}

impl Store {
    pub fn new(backend: Box<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    pub fn backend(&self) -> &dyn KeyValueBackend {
        self.backend.as_ref()
    }

    /// Reads the collection stored under `key`.
    ///
    /// Absent, unreadable, or malformed values all yield an empty collection;
    /// the failure is logged and never reaches the caller.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_load(key) {
            Ok(records) => records,
            Err(err) => {
                warn!(key, error = %err, "falling back to an empty collection");
                Vec::new()
            }
        }
    }

    /// Like [`Store::load`] but reports why a stored value was rejected.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.backend.get(key)? else {
            debug!(key, "no stored value");
            return Ok(Vec::new());
        };
        let records: Vec<T> =
            serde_json::from_str(&raw).map_err(|err| BudgetError::StorageReadCorrupt {
                key: key.to_string(),
                reason: err.to_string(),
            })?;
        debug!(key, count = records.len(), "loaded collection");
        Ok(records)
    }

    /// Replaces the stored value for `key` with the full collection.
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.backend.set(key, &json)?;
        debug!(key, count = records.len(), "saved collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Goal, Transaction, TransactionType};

    #[test]
    fn missing_key_loads_empty() {
        let store = Store::in_memory();
        let loaded: Vec<Goal> = store.load(GOALS_KEY);
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let store = Store::in_memory();
        let records = vec![
            Transaction::new("Salary", 100.0, TransactionType::Income).unwrap(),
            Transaction::new("Rent", 60.0, TransactionType::Expense).unwrap(),
            Transaction::new("Broker", 20.0, TransactionType::Investment).unwrap(),
        ];
        store.save(TRANSACTIONS_KEY, &records).unwrap();
        let loaded: Vec<Transaction> = store.load(TRANSACTIONS_KEY);
        assert_eq!(loaded, records);
    }

    #[test]
    fn corrupt_value_loads_empty() {
        let store = Store::in_memory();
        store.backend().set(GOALS_KEY, "{not json").unwrap();
        let loaded: Vec<Goal> = store.load(GOALS_KEY);
        assert!(loaded.is_empty());

        let err = store.try_load::<Goal>(GOALS_KEY).expect_err("corrupt");
        assert!(matches!(err, BudgetError::StorageReadCorrupt { ref key, .. } if key == GOALS_KEY));
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let store = Store::in_memory();
        store
            .backend()
            .set(TRANSACTIONS_KEY, r#"{"description":"not an array"}"#)
            .unwrap();
        assert!(store.load::<Transaction>(TRANSACTIONS_KEY).is_empty());

        store
            .backend()
            .set(TRANSACTIONS_KEY, r#"[{"description":"x","amount":1,"type":"gift","date":"2024-01-01T00:00:00Z"}]"#)
            .unwrap();
        assert!(store.load::<Transaction>(TRANSACTIONS_KEY).is_empty());
    }

    #[test]
    fn saved_json_is_a_plain_array() {
        let store = Store::in_memory();
        let goals = vec![Goal::new("Car", 1000.0).unwrap()];
        store.save(GOALS_KEY, &goals).unwrap();
        let raw = store.backend().get(GOALS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"name":"Car","amount":1000.0,"progress":0.0}]"#);
    }
}
