use secrecy::SecretString;
use serde::Deserialize;

/// Cleanup upstream (Google Generative Language API) configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleanupConfig {
    /// API key, usually injected via `{{ env.GEMINI_API_KEY }}`
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Generation model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL override, mainly a test seam
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: None,
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-flash-latest".to_string()
}
