pub(crate) mod elevenlabs;

use async_trait::async_trait;

use crate::types::{AudioClip, Transcript};

/// Trait for speech-to-text provider implementations
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe an audio clip to raw text
    async fn transcribe(&self, clip: AudioClip) -> crate::error::Result<Transcript>;

    /// Get the provider name
    fn name(&self) -> &str;
}
