//! Request types for the OpenAI *chat/completions* v1 API.
//!
//! Only the request side is modelled: the response body is handed to the
//! core normalizer as raw text, so no response structs are needed here.

mod chat_completion;

pub use chat_completion::{ChatCompletionMessage, ChatCompletionRequest, MessageRole};
