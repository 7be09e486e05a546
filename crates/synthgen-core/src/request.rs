//! Caller-facing request types and their validation rules.

use serde::Deserialize;

use crate::error::{GenerationError, Result};

/// First-time generation: fabricate `record_count` records with
/// `property_count` properties each for `topic`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub property_count: u32,
    pub record_count: u32,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, property_count: u32, record_count: u32) -> Self {
        Self {
            topic: topic.into(),
            property_count,
            record_count,
        }
    }

    /// Both counts must be ≥ 1 and the topic non-empty.  Checked before any
    /// external call is made.
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(GenerationError::InvalidRequest(
                "topic must not be empty".into(),
            ));
        }
        if self.record_count < 1 {
            return Err(GenerationError::InvalidRequest(
                "record count must be at least 1".into(),
            ));
        }
        if self.property_count < 1 {
            return Err(GenerationError::InvalidRequest(
                "property count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Grow an existing dataset: fabricate `record_count` *additional* records
/// for `topic`.
///
/// `properties` optionally names the fields the new records should carry so
/// they stay shape-consistent with what was generated before.  Consistency
/// is a best-effort prompt instruction, not an enforced invariant.
#[derive(Debug, Clone, Deserialize)]
pub struct AppendRequest {
    pub topic: String,
    pub record_count: u32,
    #[serde(default)]
    pub properties: Option<Vec<String>>,
}

impl AppendRequest {
    pub fn new(topic: impl Into<String>, record_count: u32) -> Self {
        Self {
            topic: topic.into(),
            record_count,
            properties: None,
        }
    }

    pub fn with_properties(mut self, properties: Vec<String>) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(GenerationError::InvalidRequest(
                "topic must not be empty".into(),
            ));
        }
        if self.record_count < 1 {
            return Err(GenerationError::InvalidRequest(
                "record count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
