use std::fs;
use std::path::Path;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::audio::domain::speech_recognizer::{Recognition, SpeechRecognizer};
use crate::shared::error::TransientServiceError;

/// Speech-to-text over HTTP, speaking the whisper.cpp server contract:
/// the WAV artifact is POSTed as the `file` part of a multipart form and
/// the response body is JSON with a `text` field.
///
/// Status mapping:
/// - 2xx with non-empty text → recognized speech.
/// - 2xx with empty text, or 422 → the service could not make out speech.
/// - anything else (network failure, 429, 5xx, ...) → transient error,
///   left to the retry wrapper.
pub struct HttpSpeechRecognizer {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

#[derive(Deserialize)]
struct TranscriptBody {
    text: String,
}

impl HttpSpeechRecognizer {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            client: Client::new(),
        }
    }
}

impl SpeechRecognizer for HttpSpeechRecognizer {
    fn transcribe(&self, artifact: &Path) -> Result<Recognition, TransientServiceError> {
        let bytes = fs::read(artifact).map_err(|e| {
            TransientServiceError::new(format!("could not read {}: {e}", artifact.display()))
        })?;

        let file_name = artifact
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "chunk.wav".to_string());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("audio/wav")
            .map_err(|e| TransientServiceError::new(format!("invalid request part: {e}")))?;
        let form = Form::new()
            .part("file", part)
            .text("response_format", "json");

        let mut request = self.client.post(&self.endpoint).multipart(form);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .map_err(|e| TransientServiceError::new(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            return Ok(Recognition::Unintelligible);
        }
        if !status.is_success() {
            return Err(TransientServiceError::new(format!(
                "service returned {status}"
            )));
        }

        let body = response
            .text()
            .map_err(|e| TransientServiceError::new(format!("could not read response: {e}")))?;
        parse_transcript(&body)
    }
}

/// Decode a successful response body into a recognition outcome.
fn parse_transcript(body: &str) -> Result<Recognition, TransientServiceError> {
    let parsed: TranscriptBody = serde_json::from_str(body)
        .map_err(|e| TransientServiceError::new(format!("malformed response body: {e}")))?;
    let text = parsed.text.trim();
    if text.is_empty() {
        Ok(Recognition::Unintelligible)
    } else {
        Ok(Recognition::Text(text.to_string()))
    }
}
