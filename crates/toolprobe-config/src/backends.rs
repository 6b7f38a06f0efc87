//! Backend connection configuration for the gateway and the direct provider
//!
//! Credentials are optional on purpose: their absence is surfaced as a
//! configuration error when a dispatch actually needs them, not at load time.

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Managed inference gateway configuration
///
/// The gateway exposes two API surfaces under one account: a native
/// "run inference" primitive and an OpenAI-compatible chat-completions
/// surface. Both share the same API key and account identifier.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Gateway API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Account identifier used to build the per-account base path
    #[serde(default)]
    pub account_id: Option<String>,
    /// Base URL override (defaults to the public gateway endpoint)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifiers per gateway surface
    #[serde(default)]
    pub models: GatewayModels,
}

/// Model identifiers for the gateway-routed surfaces
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayModels {
    /// Model used by the native inference primitive
    #[serde(default = "default_native_model")]
    pub native: String,
    /// Model used by the OpenAI-compatible surface for tool calls
    #[serde(default = "default_native_model")]
    pub compat: String,
    /// Model used by the OpenAI-compatible surface for plain chat
    #[serde(default = "default_chat_model")]
    pub chat: String,
}

impl Default for GatewayModels {
    fn default() -> Self {
        Self {
            native: default_native_model(),
            compat: default_native_model(),
            chat: default_chat_model(),
        }
    }
}

/// Direct provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Provider API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (defaults to the provider's public endpoint)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier
    #[serde(default = "default_provider_model")]
    pub model: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_provider_model(),
        }
    }
}

fn default_native_model() -> String {
    "@hf/nousresearch/hermes-2-pro-mistral-7b".to_owned()
}

fn default_chat_model() -> String {
    "@cf/meta/llama-3-8b-instruct".to_owned()
}

fn default_provider_model() -> String {
    "gpt-4o".to_owned()
}
