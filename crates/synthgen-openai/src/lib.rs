//! OpenAI backend for the Synthgen dataset-generation SDK.
//!
//! Implements [`synthgen_core::provider::CompletionProvider`] on top of the
//! *chat/completions* v1 endpoint.  The adapter deliberately returns the
//! response body **unparsed** — envelope extraction and payload repair live
//! in `synthgen-core::normalize`, so this crate stays a thin transport.

mod adapter;
mod model_map;
mod provider_impl;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::OpenAiClient;
