use std::path::Path;

use secrecy::ExposeSecret;

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
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if either upstream credential is missing
    pub fn validate(&self) -> anyhow::Result<()> {
        let Some(ref key) = self.transcription.api_key else {
            anyhow::bail!("transcription.api_key is required");
        };
        if key.expose_secret().is_empty() {
            anyhow::bail!("transcription.api_key must not be empty");
        }

        let Some(ref key) = self.cleanup.api_key else {
            anyhow::bail!("cleanup.api_key is required");
        };
        if key.expose_secret().is_empty() {
            anyhow::bail!("cleanup.api_key must not be empty");
        }

        Ok(())
    }
}
