//! Gateway native "run inference" wire format
//!
//! The model is addressed in the URL path (`.../ai/run/{model}`), not in the
//! body, and tools are sent flat without the function envelope.

use serde::{Deserialize, Serialize};

use crate::types::{Message, ToolSpec};

/// Request body for the native inference primitive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeChatRequest {
    /// Conversation messages
    pub messages: Vec<Message>,
    /// Flat tool definitions, omitted entirely when none are supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolSpec>>,
}
