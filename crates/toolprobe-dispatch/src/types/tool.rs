use serde::{Deserialize, Serialize};

/// Canonical tool definition
///
/// Serialized as-is this is the flat wire shape the gateway's native
/// primitive expects; OpenAI-compatible surfaces wrap it in a
/// `{type: "function", function: {...}}` envelope instead. The semantic
/// content is identical either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Tool name the model refers to when calling it
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON Schema for the tool's arguments
    pub parameters: serde_json::Value,
}

/// OpenAI-compatible tool envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrappedTool {
    /// Tool type (always "function")
    #[serde(rename = "type")]
    pub tool_type: String,
    /// The wrapped tool definition
    pub function: ToolSpec,
}

impl From<&ToolSpec> for WrappedTool {
    fn from(spec: &ToolSpec) -> Self {
        Self {
            tool_type: "function".to_owned(),
            function: spec.clone(),
        }
    }
}

/// Shape tools for the native surface; `None` when no tools are supplied
pub fn flat_tools(specs: &[ToolSpec]) -> Option<Vec<ToolSpec>> {
    if specs.is_empty() {
        None
    } else {
        Some(specs.to_vec())
    }
}

/// Shape tools for an OpenAI-compatible surface; `None` when no tools are supplied
pub fn wrapped_tools(specs: &[ToolSpec]) -> Option<Vec<WrappedTool>> {
    if specs.is_empty() {
        None
    } else {
        Some(specs.iter().map(WrappedTool::from).collect())
    }
}
