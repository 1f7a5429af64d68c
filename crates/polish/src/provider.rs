pub(crate) mod gemini;

use async_trait::async_trait;

use crate::types::CleanedText;

/// Trait for cleanup-model provider implementations
#[async_trait]
pub trait CleanupModel: Send + Sync {
    /// Run a single prompt through the model and return the generated text
    async fn clean(&self, prompt: &str) -> crate::error::Result<CleanedText>;

    /// Get the provider name
    fn name(&self) -> &str;
}
