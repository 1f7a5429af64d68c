use serde::{Deserialize, Serialize};

/// Generated text returned by the cleanup upstream
///
/// Untrimmed; surrounding whitespace is the caller's concern.
#[derive(Debug)]
pub struct CleanedText {
    pub text: String,
}

// -- Google Generative Language API wire format, trimmed to text parts --

/// `generateContent` request
#[derive(Debug, Serialize)]
pub(crate) struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    /// Wrap a single prompt as the sole user content
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Content object containing parts
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Text part within a content object
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiPart {
    pub text: String,
}

/// `generateContent` response
#[derive(Debug, Deserialize)]
pub(crate) struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// Generated candidate
#[derive(Debug, Deserialize)]
pub(crate) struct GeminiCandidate {
    pub content: GeminiContent,
}

impl GeminiResponse {
    /// The generated text lives deep in the first candidate's first part
    pub fn generated_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|part| part.text.as_str())
    }
}
