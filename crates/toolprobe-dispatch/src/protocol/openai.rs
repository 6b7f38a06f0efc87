//! OpenAI-compatible chat-completions wire format
//!
//! Used both for the direct provider and for the gateway's compat surface;
//! the two differ only in endpoint, credential, and model identifier.

use serde::{Deserialize, Serialize};

use crate::types::{Message, WrappedTool};

/// Request body for a `POST {base}/chat/completions` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<Message>,
    /// Wrapped tool definitions, omitted entirely when none are supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<WrappedTool>>,
}
