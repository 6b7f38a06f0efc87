//! Core dispatch crate for toolprobe
//!
//! Normalizes three heterogeneous tool-calling request shapes (a gateway's
//! native inference primitive, the same gateway's OpenAI-compatible surface,
//! and a direct provider) behind one dispatch surface, and exposes the probe
//! routes that exercise them with a fixed prompt and tool definition.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod dispatch;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod target;
pub mod types;

pub use dispatch::ToolCallDispatcher;
pub use error::DispatchError;
pub use handler::probe_router;
pub use target::BackendTarget;
pub use types::{Message, Role, ToolSpec};
