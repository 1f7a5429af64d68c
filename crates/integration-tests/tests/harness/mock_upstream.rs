//! Mock transcription and cleanup backends for integration tests
//!
//! Each mock implements just enough of the real API surface to exercise the
//! relay: the multipart speech-to-text endpoint and the `generateContent`
//! endpoint with its nested response shape.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

async fn spawn(app: Router) -> anyhow::Result<(SocketAddr, CancellationToken)> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_clone.cancelled().await;
            })
            .await
            .ok();
    });

    Ok((addr, shutdown))
}

// -- Transcription mock --

/// Mock ElevenLabs speech-to-text backend
pub struct MockTranscription {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<TranscriptionState>,
}

struct TranscriptionState {
    call_count: AtomicU32,
    /// Status and body to fail every request with (None = succeed)
    fail_with: Option<(u16, String)>,
    /// Respond 200 with a body that is not JSON
    malformed: bool,
    /// Transcript to return; None responds without a `text` field
    transcript: Option<String>,
    received_model: Mutex<Option<String>>,
    received_audio: Mutex<Option<Vec<u8>>>,
    received_content_type: Mutex<Option<String>>,
    received_filename: Mutex<Option<String>>,
}

impl MockTranscription {
    /// Start a mock that returns the given transcript
    pub async fn start(transcript: &str) -> anyhow::Result<Self> {
        Self::start_inner(Some(transcript.to_owned()), None, false).await
    }

    /// Start a mock whose success response has no `text` field
    pub async fn start_without_text() -> anyhow::Result<Self> {
        Self::start_inner(None, None, false).await
    }

    /// Start a mock that fails every request with the given status and body
    pub async fn start_failing(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(None, Some((status, body.to_owned())), false).await
    }

    /// Start a mock that answers 200 with a non-JSON body
    pub async fn start_malformed() -> anyhow::Result<Self> {
        Self::start_inner(None, None, true).await
    }

    async fn start_inner(
        transcript: Option<String>,
        fail_with: Option<(u16, String)>,
        malformed: bool,
    ) -> anyhow::Result<Self> {
        let state = Arc::new(TranscriptionState {
            call_count: AtomicU32::new(0),
            fail_with,
            malformed,
            transcript,
            received_model: Mutex::new(None),
            received_audio: Mutex::new(None),
            received_content_type: Mutex::new(None),
            received_filename: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/speech-to-text", routing::post(handle_speech_to_text))
            .with_state(Arc::clone(&state));

        let (addr, shutdown) = spawn(app).await?;

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the transcription upstream
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of transcription requests received
    pub fn call_count(&self) -> u32 {
        self.state.call_count.load(Ordering::SeqCst)
    }

    /// The `model_id` form field from the last request
    pub fn received_model(&self) -> Option<String> {
        self.state.received_model.lock().unwrap().clone()
    }

    /// The audio bytes from the last request's `file` field
    pub fn received_audio(&self) -> Option<Vec<u8>> {
        self.state.received_audio.lock().unwrap().clone()
    }

    /// The content type of the last request's `file` part
    pub fn received_content_type(&self) -> Option<String> {
        self.state.received_content_type.lock().unwrap().clone()
    }

    /// The filename of the last request's `file` part
    pub fn received_filename(&self) -> Option<String> {
        self.state.received_filename.lock().unwrap().clone()
    }
}

impl Drop for MockTranscription {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_speech_to_text(
    State(state): State<Arc<TranscriptionState>>,
    mut multipart: Multipart,
) -> axum::response::Response {
    state.call_count.fetch_add(1, Ordering::SeqCst);

    if let Some((status, body)) = &state.fail_with {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, Json(serde_json::json!({ "detail": body }))).into_response();
    }

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name().unwrap_or("") {
            "file" => {
                *state.received_content_type.lock().unwrap() = field.content_type().map(str::to_owned);
                *state.received_filename.lock().unwrap() = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await.unwrap_or_default();
                *state.received_audio.lock().unwrap() = Some(bytes.to_vec());
            }
            "model_id" => {
                let text = field.text().await.unwrap_or_default();
                *state.received_model.lock().unwrap() = Some(text);
            }
            _ => {}
        }
    }

    if state.malformed {
        return (StatusCode::OK, "<html>definitely not json</html>").into_response();
    }

    match &state.transcript {
        Some(text) => Json(serde_json::json!({ "text": text, "language_code": "en" })).into_response(),
        None => Json(serde_json::json!({ "language_code": "en" })).into_response(),
    }
}

// -- Cleanup mock --

/// Mock Google Generative Language backend
pub struct MockCleanup {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<CleanupState>,
}

struct CleanupState {
    call_count: AtomicU32,
    /// Status and plain-text body to fail every request with
    fail_with: Option<(u16, String)>,
    /// Generated text to nest in the response; None returns no candidates
    generated: Option<String>,
    received_prompt: Mutex<Option<String>>,
    received_key: Mutex<Option<String>>,
}

impl MockCleanup {
    /// Start a mock that returns the given generated text
    pub async fn start(generated: &str) -> anyhow::Result<Self> {
        Self::start_inner(Some(generated.to_owned()), None).await
    }

    /// Start a mock whose success response carries no candidates
    pub async fn start_without_candidates() -> anyhow::Result<Self> {
        Self::start_inner(None, None).await
    }

    /// Start a mock that fails every request with the given status and body
    pub async fn start_failing(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(None, Some((status, body.to_owned()))).await
    }

    async fn start_inner(generated: Option<String>, fail_with: Option<(u16, String)>) -> anyhow::Result<Self> {
        let state = Arc::new(CleanupState {
            call_count: AtomicU32::new(0),
            fail_with,
            generated,
            received_prompt: Mutex::new(None),
            received_key: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1beta/models/{model_call}", routing::post(handle_generate_content))
            .with_state(Arc::clone(&state));

        let (addr, shutdown) = spawn(app).await?;

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the cleanup upstream
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    /// Number of cleanup requests received
    pub fn call_count(&self) -> u32 {
        self.state.call_count.load(Ordering::SeqCst)
    }

    /// The prompt text from the last request
    pub fn received_prompt(&self) -> Option<String> {
        self.state.received_prompt.lock().unwrap().clone()
    }

    /// The `key` query parameter from the last request
    pub fn received_key(&self) -> Option<String> {
        self.state.received_key.lock().unwrap().clone()
    }
}

impl Drop for MockCleanup {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate_content(
    State(state): State<Arc<CleanupState>>,
    Path(model_call): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    state.call_count.fetch_add(1, Ordering::SeqCst);

    // The real endpoint is `models/{model}:generateContent`
    assert!(
        model_call.ends_with(":generateContent"),
        "unexpected model path segment: {model_call}"
    );

    *state.received_key.lock().unwrap() = params.get("key").cloned();
    *state.received_prompt.lock().unwrap() = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .map(str::to_owned);

    if let Some((status, body)) = &state.fail_with {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        // Plain-text error body; the real upstream's format varies
        return (status, body.clone()).into_response();
    }

    match &state.generated {
        Some(text) => Json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        }))
        .into_response(),
        None => Json(serde_json::json!({ "candidates": [] })).into_response(),
    }
}
