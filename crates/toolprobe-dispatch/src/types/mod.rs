//! Canonical request types shared by all backend surfaces
//!
//! Tool definitions are stored once in canonical form and shaped into the
//! per-backend wire representation at dispatch time.

pub mod message;
pub mod tool;

pub use message::{Message, Role};
pub use tool::{ToolSpec, WrappedTool, flat_tools, wrapped_tools};
