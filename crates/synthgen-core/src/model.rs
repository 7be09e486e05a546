//! Model identifiers used throughout the **synthgen** workspace.
//!
//! The enum hierarchy keeps the *public* API simple while allowing each
//! backend crate to map the variants onto its own naming scheme.  You never
//! have to type literal strings such as `"gpt-4o-mini"` in application code —
//! pick an enum variant instead and let the adapter translate it.
//!
//! # Adding more models
//!
//! 1. Add the variant to the sub-enum (`OpenAiModel`, …).
//! 2. Update the mapping function in the backend crate
//!    (`synthgen-openai::model_map::map_model`, etc.).
//! 3. The compiler will tell you if you forgot to handle the new variant in
//!    a backend match statement.

/// Universal identifier for an LLM model.
///
/// * `OpenAi` – Enumerated list of officially supported OpenAI models.
/// * `Custom` – Any provider / model name not yet covered by a dedicated
///   enum.  Use this if you run a self-hosted or beta model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in OpenAI models (chat completion API).
    OpenAi(OpenAiModel),
    /// Fully qualified model name passed through to the backend verbatim.
    Custom(&'static str),
}

/// Models **officially** supported by the OpenAI backend.
///
/// Keeping the list small avoids accidental typos while still allowing
/// arbitrary model names through [`Model::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt4,
    Gpt4o,
    Gpt4oMini,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
