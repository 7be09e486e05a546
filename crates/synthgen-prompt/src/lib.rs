//! Fluent helpers for composing **plain-text model instructions**.
//!
//! Prompt strings that interleave format examples, counts and closing
//! directives quickly turn into unreadable `format!` pyramids.  This crate
//! provides a tiny builder so the *content* of the instruction stays visible
//! at the call site.

pub mod builder;

pub use builder::PromptBuilder;
