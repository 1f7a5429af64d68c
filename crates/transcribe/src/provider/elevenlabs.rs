use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::TranscribeError,
    http_client::http_client,
    types::{AudioClip, Transcript},
};

use super::SpeechToText;

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// `ElevenLabs` speech-to-text provider
///
/// Uploads the clip as a multipart form with an explicit `model_id` field,
/// which is the upload format the speech-to-text endpoint accepts.
pub(crate) struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl ElevenLabsProvider {
    pub fn new(api_key: SecretString, model: String, base_url: Option<String>) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_ELEVENLABS_API_URL.to_string());

        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl SpeechToText for ElevenLabsProvider {
    async fn transcribe(&self, clip: AudioClip) -> crate::error::Result<Transcript> {
        let url = format!("{}/speech-to-text", self.base_url);

        tracing::debug!(
            "ElevenLabs transcription request: {} bytes, model={}",
            clip.data.len(),
            self.model,
        );

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(clip.data)
                    .file_name(clip.filename)
                    .mime_str(&clip.content_type)
                    .map_err(|e| TranscribeError::InvalidPayload(format!("invalid content type: {e}")))?,
            )
            .text("model_id", self.model.clone());

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", self.api_key.expose_secret().to_string())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                TranscribeError::Connection(format!("failed to send request to ElevenLabs: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("ElevenLabs API error ({status}): {error_text}");

            return Err(TranscribeError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let transcript: Transcript = response.json().await.map_err(|e| {
            tracing::error!("failed to parse ElevenLabs response: {e}");
            TranscribeError::MalformedResponse(e.to_string())
        })?;

        tracing::debug!("ElevenLabs transcription complete, {} chars", transcript.text.len());

        Ok(transcript)
    }

    fn name(&self) -> &str {
        "elevenlabs"
    }
}
