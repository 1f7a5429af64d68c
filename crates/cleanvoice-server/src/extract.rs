use axum::body::Body;
use transcribe::AudioClip;

use crate::error::RelayError;

/// Extractor for the raw audio body
///
/// The body is treated as an opaque byte sequence; it is never sniffed or
/// decoded here. The inbound `Content-Type` travels with the bytes so the
/// upstream multipart form can describe them.
pub struct ExtractAudio(pub AudioClip);

/// Body limit for audio uploads (32 MiB)
const BODY_LIMIT_BYTES: usize = 32 << 20;

/// Content type assumed when the caller sends none
const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";

impl<S> axum::extract::FromRequest<S> for ExtractAudio
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        let content_type = parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES)
            .await
            .map_err(|err| RelayError::Internal(format!("failed to read request body: {err}")))?;

        let filename = filename_for(&content_type).to_string();

        Ok(Self(AudioClip {
            data: bytes.to_vec(),
            content_type,
            filename,
        }))
    }
}

/// Pick an upload filename matching the clip's media type
///
/// The upstream keys format detection off the extension, so a recognizable
/// one beats a generic blob name.
fn filename_for(content_type: &str) -> &'static str {
    match content_type.split(';').next().unwrap_or("").trim() {
        "audio/mpeg" | "audio/mp3" => "audio.mp3",
        "audio/webm" => "audio.webm",
        "audio/wav" | "audio/x-wav" => "audio.wav",
        "audio/ogg" => "audio.ogg",
        "audio/mp4" => "audio.m4a",
        _ => "audio.bin",
    }
}
