//! Keyed persistence contract for accumulated datasets.
//!
//! The storage technology behind a deployment (relational, document, …) is
//! out of scope for the core; the service only needs this narrow contract.
//! [`MemoryStore`] is the in-process reference implementation used by tests
//! and small tools.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::dataset::Dataset;
use crate::error::Result;

/// Topic-keyed persistence for datasets.
///
/// The trait defines no cross-call locking: concurrent read-modify-write
/// cycles on one topic race, and the last writer's merge wins.  A
/// per-topic serialization point (optimistic versioning, single-writer
/// queue) belongs to the implementing storage layer.
pub trait DatasetStore: Send + Sync {
    /// Create or replace the dataset stored under `dataset.topic`.
    fn save(&self, dataset: Dataset) -> Result<()>;

    /// Look up the dataset for `topic`, if any.
    fn find_by_topic(&self, topic: &str) -> Result<Option<Dataset>>;

    /// Remove the dataset for `topic`.  Deleting an absent topic succeeds.
    fn delete_by_topic(&self, topic: &str) -> Result<()>;
}

/// Mutex-guarded in-memory store.
///
/// Datasets live in a plain `HashMap`; cloning on read keeps the lock scope
/// minimal and hands callers an owned snapshot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    datasets: Mutex<HashMap<String, Dataset>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatasetStore for MemoryStore {
    fn save(&self, dataset: Dataset) -> Result<()> {
        let mut datasets = self.datasets.lock().expect("dataset store lock poisoned");
        datasets.insert(dataset.topic.clone(), dataset);
        Ok(())
    }

    fn find_by_topic(&self, topic: &str) -> Result<Option<Dataset>> {
        let datasets = self.datasets.lock().expect("dataset store lock poisoned");
        Ok(datasets.get(topic).cloned())
    }

    fn delete_by_topic(&self, topic: &str) -> Result<()> {
        let mut datasets = self.datasets.lock().expect("dataset store lock poisoned");
        datasets.remove(topic);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn save_replaces_existing_dataset() {
        let store = MemoryStore::new();
        store
            .save(Dataset::new("Cities", vec![json!({"a": 1})]))
            .unwrap();
        store
            .save(Dataset::new("Cities", vec![json!({"b": 2})]))
            .unwrap();

        let dataset = store.find_by_topic("Cities").unwrap().unwrap();
        assert_eq!(dataset.records, vec![json!({"b": 2})]);
    }

    #[test]
    fn topics_are_case_sensitive() {
        let store = MemoryStore::new();
        store.save(Dataset::new("Cities", vec![])).unwrap();

        assert!(store.find_by_topic("cities").unwrap().is_none());
        assert!(store.find_by_topic("Cities").unwrap().is_some());
    }

    #[test]
    fn delete_is_idempotent() {
        let store = MemoryStore::new();
        store.save(Dataset::new("Cities", vec![])).unwrap();

        store.delete_by_topic("Cities").unwrap();
        store.delete_by_topic("Cities").unwrap();
        assert!(store.find_by_topic("Cities").unwrap().is_none());
    }
}
