use std::path::Path;
use std::time::Duration;

use super::speech_recognizer::{Recognition, SpeechRecognizer};
use crate::shared::constants::{
    DEFAULT_DELAY_BASE_SECS, DEFAULT_RETRIES, RETRY_EXHAUSTED_SENTINEL, UNINTELLIGIBLE_FALLBACK,
};

/// How often and how patiently a chunk is retried after transient service
/// failures.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Total attempts, not additional ones. Must be at least 1.
    pub retries: u32,
    /// Base backoff; the wait before attempt n+1 is
    /// `delay_base + jitter() * delay_base`.
    pub delay_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            delay_base: Duration::from_secs(DEFAULT_DELAY_BASE_SECS),
        }
    }
}

/// Blocking wait between attempts. Injectable so tests run without
/// wall-clock sleeps.
pub type SleepFn = Box<dyn Fn(Duration) + Send>;

/// Uniform random value in [0, 1) used to jitter the backoff. Injectable so
/// tests are deterministic.
pub type JitterFn = Box<dyn Fn() -> f64 + Send>;

pub fn wall_clock_sleep() -> SleepFn {
    Box::new(std::thread::sleep)
}

pub fn uniform_jitter() -> JitterFn {
    Box::new(rand::random::<f64>)
}

/// Transcribe one chunk artifact, retrying transient service failures.
///
/// Outcomes per attempt:
/// - recognized text: returned as-is, no further attempts.
/// - unintelligible: the fixed fallback string, no further attempts — the
///   service understood the request, there is nothing to retry.
/// - transient error: logged; if attempts remain, sleep the jittered
///   backoff and try again.
///
/// When every attempt fails the fixed sentinel string is returned instead
/// of an error, so one bad chunk degrades the transcript without aborting
/// the run. There is no sleep after the final attempt.
pub fn transcribe_with_retry(
    recognizer: &dyn SpeechRecognizer,
    artifact: &Path,
    policy: &RetryPolicy,
    sleep: &SleepFn,
    jitter: &JitterFn,
) -> String {
    for attempt in 1..=policy.retries {
        match recognizer.transcribe(artifact) {
            Ok(Recognition::Text(text)) => return text,
            Ok(Recognition::Unintelligible) => return UNINTELLIGIBLE_FALLBACK.to_string(),
            Err(e) => {
                log::warn!(
                    "attempt {attempt}/{} failed for {}: {e}",
                    policy.retries,
                    artifact.display()
                );
                if attempt < policy.retries {
                    let backoff = policy.delay_base.mul_f64(1.0 + jitter());
                    sleep(backoff);
                }
            }
        }
    }
    RETRY_EXHAUSTED_SENTINEL.to_string()
}
