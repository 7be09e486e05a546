//! Provider-agnostic core of the **Synthgen** dataset-generation SDK.
//!
//! The crate is organised around one pipeline:
//!
//! 1. [`prompt`] turns a caller request into a natural-language instruction,
//! 2. a [`provider::CompletionProvider`] backend ships it to a remote
//!    completion endpoint and hands back the raw response envelope,
//! 3. [`normalize`] repairs the model's free-text reply into a canonical
//!    array of JSON records,
//! 4. a [`store::DatasetStore`] accumulates the records per topic.
//!
//! [`service::GenerationService`] wires the four stages together.  Backends
//! live in their own crates (e.g. `synthgen-openai`) and only need to
//! implement [`provider::CompletionProvider`].

pub mod dataset;
pub mod error;
pub mod message;
pub mod model;
pub mod normalize;
pub mod prompt;
pub mod provider;
pub mod request;
pub mod service;
pub mod store;

pub use dataset::Dataset;
pub use error::{GenerationError, Result};
pub use request::{AppendRequest, GenerationRequest};
pub use service::GenerationService;
