//! The backend contract: turning a prompt into one completion-endpoint call.

use std::{future::Future, pin::Pin};

use crate::{error::Result, message::Message, model::Model};

/// A **backend** turns a chat prompt into a network call to a concrete
/// provider (OpenAI, Ollama, …) and hands back the provider's reply.
///
/// The trait is intentionally minimal:
///
/// * **One method** – `complete`, which performs a *single* non-streaming
///   round-trip.
/// * **Raw output** – the returned string is the provider's response
///   envelope *as received*.  Extracting and repairing the model's answer is
///   the job of [`crate::normalize`], so backends stay dumb pipes and the
///   whole repair pipeline can be unit-tested without a transport.
///
/// Backends define no retry policy: a transport failure or non-success
/// status is surfaced immediately, never silently retried.  Callers may
/// apply their own retry/backoff around [`crate::GenerationService`].
pub trait CompletionProvider: Send + Sync {
    /// Execute the prompt and return the raw response envelope text.
    fn complete<'p>(
        &'p self,
        params: CompletionParameters,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>>;
}

/// Everything a backend needs for one completion call: the target model, the
/// ordered message list, and a maximum-output-token budget.
#[derive(Debug, Clone)]
pub struct CompletionParameters {
    pub messages: Vec<Message>,
    pub model: Model,
    pub max_tokens: u32,
}

impl CompletionParameters {
    pub fn new(messages: Vec<Message>, model: Model) -> Self {
        Self {
            messages,
            model,
            max_tokens: 3000,
        }
    }

    pub fn messages(&self) -> &Vec<Message> {
        &self.messages
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
