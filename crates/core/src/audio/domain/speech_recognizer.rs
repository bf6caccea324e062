use std::path::Path;

use crate::shared::error::TransientServiceError;

/// What the speech service made of a chunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recognition {
    /// Recognized speech.
    Text(String),
    /// The service answered but could not make out any speech. This is a
    /// content-level outcome, not a failure, and is never retried.
    Unintelligible,
}

/// Domain interface for remote speech-to-text transcription.
///
/// Implementations send one chunk artifact per call. Transport and quota
/// trouble comes back as `TransientServiceError` so the retry wrapper can
/// distinguish it from `Unintelligible`.
pub trait SpeechRecognizer: Send {
    fn transcribe(&self, artifact: &Path) -> Result<Recognition, TransientServiceError>;
}
