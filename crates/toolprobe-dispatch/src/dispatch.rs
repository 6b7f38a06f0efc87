//! The dispatcher: target resolution, payload shaping, and the remote call

use secrecy::ExposeSecret;
use toolprobe_config::{GatewayConfig, ProviderConfig};

use crate::error::DispatchError;
use crate::protocol::{NativeChatRequest, OpenAiChatRequest};
use crate::target::BackendTarget;
use crate::types::{Message, ToolSpec, flat_tools, wrapped_tools};

/// Default gateway API base URL
const DEFAULT_GATEWAY_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Default direct provider API base URL
const DEFAULT_PROVIDER_BASE: &str = "https://api.openai.com/v1";

/// Maps a [`BackendTarget`] to a credential/endpoint pair and a payload
/// shape, performs the remote call, and relays the result verbatim
///
/// Stateless per dispatch: concurrent dispatches share only this struct's
/// immutable configuration and the HTTP client's connection pool.
pub struct ToolCallDispatcher {
    client: reqwest::Client,
    gateway: GatewayConfig,
    provider: ProviderConfig,
}

/// Connection details resolved for one dispatch
#[derive(Debug)]
struct ResolvedBackend {
    url: String,
    api_key: String,
    model: String,
}

impl ToolCallDispatcher {
    /// Create a dispatcher from backend configuration
    pub fn new(gateway: GatewayConfig, provider: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            gateway,
            provider,
        }
    }

    /// Model the gateway's compat surface uses for plain chat (no tools)
    pub fn plain_chat_model(&self) -> &str {
        &self.gateway.models.chat
    }

    /// Configured default model for a target
    fn model_for(&self, target: BackendTarget) -> &str {
        match target {
            BackendTarget::GatewayNative => &self.gateway.models.native,
            BackendTarget::GatewayCompat => &self.gateway.models.compat,
            BackendTarget::DirectProvider => &self.provider.model,
        }
    }

    /// Gateway API key, required for both gateway surfaces
    fn gateway_api_key(&self) -> Result<String, DispatchError> {
        self.gateway
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().to_owned())
            .ok_or_else(|| DispatchError::Configuration("gateway.api_key is not configured".to_owned()))
    }

    /// Per-account base path shared by the gateway surfaces
    fn gateway_account_base(&self) -> Result<String, DispatchError> {
        let account = self
            .gateway
            .account_id
            .as_deref()
            .ok_or_else(|| DispatchError::Configuration("gateway.account_id is not configured".to_owned()))?;

        let base = self
            .gateway
            .base_url
            .as_ref()
            .map_or(DEFAULT_GATEWAY_BASE, |url| url.as_str());

        Ok(format!("{}/accounts/{account}/ai", base.trim_end_matches('/')))
    }

    /// Resolve endpoint URL, credential, and model for a target
    fn resolve(&self, target: BackendTarget, model: &str) -> Result<ResolvedBackend, DispatchError> {
        let (url, api_key) = match target {
            BackendTarget::GatewayNative => {
                // Native primitive addresses the model in the path
                let url = format!("{}/run/{model}", self.gateway_account_base()?);
                (url, self.gateway_api_key()?)
            }
            BackendTarget::GatewayCompat => {
                let url = format!("{}/v1/chat/completions", self.gateway_account_base()?);
                (url, self.gateway_api_key()?)
            }
            BackendTarget::DirectProvider => {
                let api_key = self
                    .provider
                    .api_key
                    .as_ref()
                    .map(|key| key.expose_secret().to_owned())
                    .ok_or_else(|| DispatchError::Configuration("provider.api_key is not configured".to_owned()))?;

                let base = self
                    .provider
                    .base_url
                    .as_ref()
                    .map_or(DEFAULT_PROVIDER_BASE, |url| url.as_str());

                (format!("{}/chat/completions", base.trim_end_matches('/')), api_key)
            }
        };

        Ok(ResolvedBackend {
            url,
            api_key,
            model: model.to_owned(),
        })
    }

    /// Dispatch a single-message chat request using the target's configured model
    ///
    /// Returns the backend's response body verbatim. Failures propagate as
    /// [`DispatchError`] without retry or fallback.
    pub async fn dispatch(
        &self,
        target: BackendTarget,
        prompt: &str,
        tools: &[ToolSpec],
    ) -> Result<serde_json::Value, DispatchError> {
        let model = self.model_for(target).to_owned();
        self.dispatch_with_model(target, &model, prompt, tools).await
    }

    /// Dispatch with an explicit model instead of the target's configured one
    pub async fn dispatch_with_model(
        &self,
        target: BackendTarget,
        model: &str,
        prompt: &str,
        tools: &[ToolSpec],
    ) -> Result<serde_json::Value, DispatchError> {
        let backend = self.resolve(target, model)?;
        let messages = vec![Message::user(prompt)];

        tracing::debug!(backend = %target, model = %backend.model, "dispatching chat request");

        let builder = self.client.post(&backend.url).bearer_auth(&backend.api_key);

        let builder = match target {
            BackendTarget::GatewayNative => builder.json(&NativeChatRequest {
                messages,
                tools: flat_tools(tools),
            }),
            BackendTarget::GatewayCompat | BackendTarget::DirectProvider => builder.json(&OpenAiChatRequest {
                model: backend.model.clone(),
                messages,
                tools: wrapped_tools(tools),
            }),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!(backend = %target, error = %e, "backend request failed");
            DispatchError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(backend = %target, status = %status, "backend returned error");
            return Err(DispatchError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        // Relayed verbatim, never inspected
        response
            .json()
            .await
            .map_err(|e| DispatchError::Transport(format!("failed to read response body: {e}")))
    }
}
