use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a transcription run.
///
/// Per-chunk service trouble never surfaces here; it is contained inside the
/// retry wrapper and degrades into placeholder text in the transcript.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ffmpeg_next::Error,
    },
    #[error("no audio track in {0}")]
    NoAudioTrack(PathBuf),
    #[error("failed to write audio segment {path}: {source}")]
    SegmentWrite {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A recoverable failure from the remote speech service: the request itself
/// broke (network, quota, server error), as opposed to the service answering
/// that it could not understand the audio.
#[derive(Error, Debug)]
#[error("speech service request failed: {detail}")]
pub struct TransientServiceError {
    pub detail: String,
}

impl TransientServiceError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
