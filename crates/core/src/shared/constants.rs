/// Seconds of audio per transcription chunk.
pub const DEFAULT_CHUNK_LENGTH_SECS: u32 = 30;

/// Attempts per chunk before giving up on the speech service.
pub const DEFAULT_RETRIES: u32 = 3;

/// Base backoff delay between attempts, in seconds. The actual wait is
/// `delay + jitter * delay` with jitter uniform in [0, 1).
pub const DEFAULT_DELAY_BASE_SECS: u64 = 5;

/// Directory holding the per-chunk WAV artifacts during a run.
pub const DEFAULT_WORK_DIR: &str = "audio_chunks";

/// Fixed name of the full-length intermediate audio file inside the work dir.
pub const INTERMEDIATE_AUDIO_NAME: &str = "audio.wav";

/// Sample rate every decoded track is resampled to before chunking.
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Default speech service endpoint (whisper.cpp server inference route).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/inference";

/// Returned for a chunk the service recognized as speech-free or garbled.
pub const UNINTELLIGIBLE_FALLBACK: &str =
    "Speech Recognition could not understand the audio.";

/// Returned for a chunk whose every attempt hit a transient service error.
pub const RETRY_EXHAUSTED_SENTINEL: &str = "Transcription failed after multiple attempts.";
