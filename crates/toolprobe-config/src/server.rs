use std::net::SocketAddr;

use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to listen on (defaults to 0.0.0.0:3000)
    #[serde(default)]
    pub listen_address: Option<SocketAddr>,
    /// Health endpoint configuration
    #[serde(default)]
    pub health: HealthConfig,
}

/// Health endpoint configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    /// Whether the health endpoint is exposed
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Path the health endpoint is served on
    #[serde(default = "default_health_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_health_path(),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_health_path() -> String {
    "/healthz".to_owned()
}
