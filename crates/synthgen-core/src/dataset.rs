//! The per-topic aggregate owned by the [`crate::store::DatasetStore`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cumulative record set for one topic.
///
/// Created on the first successful generation for a topic, grown by append
/// calls, deleted explicitly, never auto-expired.  The topic key is
/// case-sensitive and unique per store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub topic: String,
    /// Always a top-level array of record objects; record shapes are
    /// whatever the model produced.
    pub records: Vec<Value>,
    pub updated_at: DateTime<Utc>,
}

impl Dataset {
    pub fn new(topic: impl Into<String>, records: Vec<Value>) -> Self {
        Self {
            topic: topic.into(),
            records,
            updated_at: Utc::now(),
        }
    }

    /// Append `records` after the existing ones (order preserved, no dedup)
    /// and refresh the last-modified timestamp.
    pub fn append(&mut self, records: Vec<Value>) {
        self.records.extend(records);
        self.updated_at = Utc::now();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
