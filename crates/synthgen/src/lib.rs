//! # `synthgen` – The umbrella crate
//!
//! A *one-stop import* that glues together the building-block crates in the
//! workspace
//!
//! | Crate                  | What it provides                                                        |
//! |------------------------|-------------------------------------------------------------------------|
//! | **`synthgen-core`**    | Provider-agnostic traits, normalization pipeline, generation service    |
//! | **`synthgen-prompt`**  | Fluent builder for composing plain-text model instructions              |
//! | **`synthgen-openai`**  | Thin HTTP client implementing the backend contract for OpenAI *(optional)* |
//!
//! By default the crate re-exports **core** and **prompt** plus the OpenAI
//! adapter; disable the `openai` Cargo feature to stay 100 % provider-
//! agnostic and keep `reqwest`, TLS, etc. out of your binary.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use synthgen::{GenerationRequest, GenerationService, store::MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = synthgen::openai::OpenAiAdapterBuilder::new_from_env()
//!         .build()?;
//!     let service = GenerationService::new(backend, MemoryStore::new());
//!
//!     let records = service
//!         .generate(GenerationRequest::new("Flight Schedules", 3, 2))
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&records)?);
//!     Ok(())
//! }
//! ```
//!
//! The `pub use` statements below simply forward the public API of the
//! individual crates so users can write `synthgen::GenerationService`
//! instead of juggling three separate dependencies.
#![doc(html_root_url = "https://docs.rs/synthgen/latest")]

pub use synthgen_core::*;
pub use synthgen_prompt as prompt_builder;

#[cfg(feature = "openai")]
pub use synthgen_openai as openai;
