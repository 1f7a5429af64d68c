use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolishError>;

/// Errors from the cleanup upstream
#[derive(Debug, Error)]
pub enum PolishError {
    /// Network or connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Upstream API returned a non-success status
    ///
    /// The message carries the remote error body verbatim; the format
    /// varies upstream (plain text or JSON) so it is not parsed here.
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Upstream returned a body that could not be parsed
    #[error("malformed cleanup response: {0}")]
    MalformedResponse(String),

    /// A success response without the generated-text field
    ///
    /// Kept distinct from `MalformedResponse` so an empty candidate list is
    /// legible in logs as its own failure mode.
    #[error("cleanup response missing generated text")]
    MissingText,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
