use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails. Missing
    /// credentials are NOT an error here; they surface at dispatch time.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error on empty model identifiers or a malformed health path
    pub fn validate(&self) -> anyhow::Result<()> {
        for (surface, model) in [
            ("gateway.models.native", &self.gateway.models.native),
            ("gateway.models.compat", &self.gateway.models.compat),
            ("gateway.models.chat", &self.gateway.models.chat),
            ("provider.model", &self.provider.model),
        ] {
            if model.trim().is_empty() {
                anyhow::bail!("{surface} must not be empty");
            }
        }

        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        Ok(())
    }
}
