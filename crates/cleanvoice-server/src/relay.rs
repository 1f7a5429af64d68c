use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::{RelayState, error::Result, extract::ExtractAudio};

/// Success payload returned to the extension
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictationResponse {
    /// Grammatically cleaned transcript, trimmed of surrounding whitespace
    pub cleaned_text: String,
}

/// Handle a dictation: transcribe the clip, then clean the transcript
///
/// The two upstream calls are strictly sequential; a transcription failure
/// short-circuits before the cleanup model is ever contacted. Each call is
/// attempted exactly once.
pub async fn relay(
    State(state): State<Arc<RelayState>>,
    ExtractAudio(clip): ExtractAudio,
) -> Result<Json<DictationResponse>> {
    tracing::debug!("dictation received: {} bytes ({})", clip.data.len(), clip.content_type);

    let transcript = state.transcriber.transcribe(clip).await?;

    // An absent transcript field comes back as "" and still flows through
    let prompt = polish::cleanup_prompt(&transcript.text);
    let cleaned = state.cleaner.clean(&prompt).await?;

    Ok(Json(DictationResponse {
        cleaned_text: cleaned.text.trim().to_string(),
    }))
}

/// Answer CORS preflights with an empty 204
///
/// The allow headers are appended by the CORS middleware like on every
/// other response.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
