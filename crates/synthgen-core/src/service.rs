//! Orchestration of the generation pipeline.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{GenerationError, Result};
use crate::message::Message;
use crate::model::{Model, OpenAiModel};
use crate::normalize::normalize;
use crate::prompt;
use crate::provider::{CompletionParameters, CompletionProvider};
use crate::request::{AppendRequest, GenerationRequest};
use crate::store::DatasetStore;

/// Ties prompt construction, the completion backend, response normalization
/// and the dataset store together.
///
/// The service holds no mutable state of its own — all state lives in the
/// store — so a single instance can serve concurrent callers.  Each
/// successful generation performs exactly one backend call and one store
/// write; any failure before the write leaves the store untouched.
///
/// Both collaborators are injected at construction.  Clone the service if
/// you need to share it across tasks; the backend and store are behind
/// `Arc`s, so the clone is cheap.
#[derive(Debug, Clone)]
pub struct GenerationService<P, S> {
    provider: Arc<P>,
    store: Arc<S>,
    model: Model,
    max_tokens: u32,
}

impl<P, S> GenerationService<P, S>
where
    P: CompletionProvider,
    S: DatasetStore,
{
    /// Create a service with the default model (`gpt-4o-mini`) and token
    /// budget.
    pub fn new(provider: P, store: S) -> Self {
        Self {
            provider: Arc::new(provider),
            store: Arc::new(store),
            model: Model::OpenAi(OpenAiModel::Gpt4oMini),
            max_tokens: 3000,
        }
    }

    /// Route requests to a different model.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Override the maximum-output-token budget per generation call.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Access the underlying store (e.g. to read a full dataset aggregate).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate a fresh dataset for the request's topic.
    ///
    /// Any dataset already stored under the topic is replaced wholesale —
    /// last write wins, no merge on first generation.  Returns the
    /// normalized record set.
    pub async fn generate(&self, request: GenerationRequest) -> Result<Vec<Value>> {
        let prompt = prompt::initial_prompt(&request)?;
        let records = self.complete_and_normalize(prompt).await?;

        self.store
            .save(Dataset::new(request.topic.clone(), records.clone()))?;
        debug!(topic = %request.topic, count = records.len(), "dataset saved");

        Ok(records)
    }

    /// Generate additional records and append them to the topic's dataset.
    ///
    /// Existing records come first, new ones after — order preserved, no
    /// dedup.  A topic with no dataset yet is not an error: the call then
    /// behaves exactly like [`Self::generate`] and creates a fresh dataset.
    /// Returns only the newly generated increment; use [`Self::get_by_topic`]
    /// for the accumulated set.
    pub async fn generate_more(&self, request: AppendRequest) -> Result<Vec<Value>> {
        let prompt = prompt::append_prompt(&request)?;
        let records = self.complete_and_normalize(prompt).await?;

        let dataset = match self.store.find_by_topic(&request.topic)? {
            Some(mut existing) => {
                existing.append(records.clone());
                existing
            }
            None => Dataset::new(request.topic.clone(), records.clone()),
        };
        self.store.save(dataset)?;
        debug!(topic = %request.topic, count = records.len(), "dataset appended");

        Ok(records)
    }

    /// Read the accumulated record set for `topic`.
    pub fn get_by_topic(&self, topic: &str) -> Result<Vec<Value>> {
        self.store
            .find_by_topic(topic)?
            .map(|dataset| dataset.records)
            .ok_or_else(|| GenerationError::NotFound(topic.to_owned()))
    }

    /// Drop the dataset for `topic`.  Deleting an absent topic succeeds.
    pub fn delete_by_topic(&self, topic: &str) -> Result<()> {
        self.store.delete_by_topic(topic)
    }

    /// One backend round-trip followed by normalization.
    async fn complete_and_normalize(&self, prompt: String) -> Result<Vec<Value>> {
        let params = CompletionParameters::new(vec![Message::user(prompt)], self.model.clone())
            .with_max_tokens(self.max_tokens);

        let raw = self.provider.complete(params).await?;
        debug!(%raw, "raw completion response");

        normalize(&raw)
    }
}
