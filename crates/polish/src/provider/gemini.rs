use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::PolishError,
    http_client::http_client,
    types::{CleanedText, GeminiRequest, GeminiResponse},
};

use super::CleanupModel;

/// Default Google Generative Language API base URL
const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Generative Language API provider
pub(crate) struct GeminiProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: SecretString, model: String, base_url: Option<String>) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string());

        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }

    /// Build the `generateContent` endpoint URL
    ///
    /// The API key goes in the `key` query parameter, which is how this
    /// upstream authenticates.
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key.expose_secret(),
        )
    }
}

#[async_trait]
impl CleanupModel for GeminiProvider {
    async fn clean(&self, prompt: &str) -> crate::error::Result<CleanedText> {
        let body = GeminiRequest::from_prompt(prompt);

        tracing::debug!("Gemini cleanup request: model={}, prompt_len={}", self.model, prompt.len());

        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini request failed: {e}");
                PolishError::Connection(format!("failed to send request to Gemini: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Gemini API error ({status}): {error_text}");

            return Err(PolishError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let result: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to parse Gemini response: {e}");
            PolishError::MalformedResponse(e.to_string())
        })?;

        let Some(text) = result.generated_text() else {
            tracing::warn!("Gemini returned a success response with no generated text");
            return Err(PolishError::MissingText);
        };

        tracing::debug!("Gemini cleanup complete, {} chars", text.len());

        Ok(CleanedText { text: text.to_string() })
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
