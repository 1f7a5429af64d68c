#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;
mod types;

pub use error::{Result, TranscribeError};
pub use provider::SpeechToText;
pub use types::{AudioClip, Transcript};

use provider::elevenlabs::ElevenLabsProvider;

/// Build the speech-to-text client from configuration
///
/// # Errors
///
/// Returns an error if the transcription credential is missing
pub fn build_client(config: &cleanvoice_config::Config) -> Result<Box<dyn SpeechToText>> {
    let api_key = config
        .transcription
        .api_key
        .clone()
        .ok_or_else(|| TranscribeError::Config("API key required for transcription".to_string()))?;

    Ok(Box::new(ElevenLabsProvider::new(
        api_key,
        config.transcription.model.clone(),
        config.transcription.base_url.clone(),
    )))
}
