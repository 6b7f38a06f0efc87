#![allow(clippy::must_use_candidate)]

pub mod backends;
mod env;
mod loader;
pub mod server;

use serde::Deserialize;

pub use backends::*;
pub use server::*;

/// Top-level toolprobe configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Managed inference gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Direct provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
}
