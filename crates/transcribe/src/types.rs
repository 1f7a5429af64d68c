use serde::Deserialize;

/// An opaque audio payload as captured by the caller
///
/// The bytes are never decoded locally; content type and filename only
/// exist so the upstream multipart form can describe the blob.
#[derive(Debug)]
pub struct AudioClip {
    /// Raw audio data
    pub data: Vec<u8>,
    /// Content type of the audio (e.g. "audio/webm")
    pub content_type: String,
    /// Filename to attach to the upload
    pub filename: String,
}

/// Raw transcript returned by the transcription upstream
#[derive(Debug, Deserialize)]
pub struct Transcript {
    /// Transcribed text; empty when the upstream omits the field
    #[serde(default)]
    pub text: String,
}
