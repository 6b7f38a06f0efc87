//! Wire request formats for the backend surfaces
//!
//! Responses are never modeled: every backend's response body is relayed to
//! the caller verbatim as `serde_json::Value`.

pub mod native;
pub mod openai;

pub use native::NativeChatRequest;
pub use openai::OpenAiChatRequest;
