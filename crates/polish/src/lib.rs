#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod prompt;
mod provider;
mod types;

pub use error::{PolishError, Result};
pub use prompt::cleanup_prompt;
pub use provider::CleanupModel;
pub use types::CleanedText;

use provider::gemini::GeminiProvider;

/// Build the cleanup-model client from configuration
///
/// # Errors
///
/// Returns an error if the cleanup credential is missing
pub fn build_client(config: &cleanvoice_config::Config) -> Result<Box<dyn CleanupModel>> {
    let api_key = config
        .cleanup
        .api_key
        .clone()
        .ok_or_else(|| PolishError::Config("API key required for cleanup".to_string()))?;

    Ok(Box::new(GeminiProvider::new(
        api_key,
        config.cleanup.model.clone(),
        config.cleanup.base_url.clone(),
    )))
}
