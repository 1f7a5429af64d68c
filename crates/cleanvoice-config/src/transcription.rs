use secrecy::SecretString;
use serde::Deserialize;

/// Transcription upstream (ElevenLabs speech-to-text) configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptionConfig {
    /// API key, usually injected via `{{ env.ELEVENLABS_API_KEY }}`
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Transcription model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL override, mainly a test seam
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: None,
        }
    }
}

fn default_model() -> String {
    "scribe_v1".to_string()
}
