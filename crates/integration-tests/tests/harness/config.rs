//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use cleanvoice_config::{CleanupConfig, Config, CorsConfig, ServerConfig, TranscriptionConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                transcription: TranscriptionConfig {
                    api_key: Some(SecretString::from("test-elevenlabs-key")),
                    ..TranscriptionConfig::default()
                },
                cleanup: CleanupConfig {
                    api_key: Some(SecretString::from("test-gemini-key")),
                    ..CleanupConfig::default()
                },
            },
        }
    }

    /// Point the transcription upstream at a mock backend
    pub fn with_transcription(mut self, base_url: &str) -> Self {
        self.config.transcription.base_url = Some(base_url.to_owned());
        self
    }

    /// Point the cleanup upstream at a mock backend
    pub fn with_cleanup(mut self, base_url: &str) -> Self {
        self.config.cleanup.base_url = Some(base_url.to_owned());
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
