use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelayError>;

/// Relay pipeline errors
///
/// The prefixes distinguish which upstream failed; the wrapped message
/// carries the remote error detail verbatim.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The transcription upstream failed; cleanup was never attempted
    #[error("transcription failed: {0}")]
    Transcription(#[from] transcribe::TranscribeError),

    /// The cleanup upstream failed
    #[error("cleanup failed: {0}")]
    Cleanup(#[from] polish::PolishError),

    /// Local failure (body read, unexpected state)
    #[error("{0}")]
    Internal(String),
}

/// Single-field envelope the extension expects for every failure
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        // The inbound contract fixes every failure status at 500; the
        // distinguishing detail lives in the message itself. Bad methods
        // never reach this path (routing answers those with 405).
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorEnvelope { error: self.to_string() }),
        )
            .into_response()
    }
}
