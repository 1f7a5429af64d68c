use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranscribeError>;

/// Errors from the transcription upstream
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// Network or connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Upstream API returned a non-success status
    ///
    /// The message carries the remote error body verbatim.
    #[error("ElevenLabs API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Upstream returned a body that could not be parsed
    #[error("malformed transcription response: {0}")]
    MalformedResponse(String),

    /// The inbound clip could not be described to the upstream
    #[error("invalid audio payload: {0}")]
    InvalidPayload(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
