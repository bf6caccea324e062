use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::audio::domain::chunk::plan_windows;
use crate::audio::domain::retry::{
    transcribe_with_retry, uniform_jitter, wall_clock_sleep, JitterFn, RetryPolicy, SleepFn,
};
use crate::audio::domain::segment_writer::SegmentWriter;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::shared::constants::{INTERMEDIATE_AUDIO_NAME, TARGET_SAMPLE_RATE};
use crate::shared::error::PipelineError;
use crate::video::domain::audio_reader::AudioReader;

use super::config::PipelineConfig;

/// The whole run, end to end: decode the video's audio track, split it
/// into fixed-length chunks, transcribe each chunk through the speech
/// service with retry, and join the fragments in chunk order.
///
/// Everything is strictly sequential; a chunk's network call finishes
/// before the next artifact is written. Chunk-level service trouble
/// degrades into placeholder fragments, only input validation and decode
/// failures abort the run.
pub struct TranscribeVideoUseCase {
    reader: Box<dyn AudioReader>,
    writer: Box<dyn SegmentWriter>,
    recognizer: Box<dyn SpeechRecognizer>,
    config: PipelineConfig,
    sleep: SleepFn,
    jitter: JitterFn,
}

impl TranscribeVideoUseCase {
    pub fn new(
        reader: Box<dyn AudioReader>,
        writer: Box<dyn SegmentWriter>,
        recognizer: Box<dyn SpeechRecognizer>,
        config: PipelineConfig,
    ) -> Self {
        Self::with_timers(
            reader,
            writer,
            recognizer,
            config,
            wall_clock_sleep(),
            uniform_jitter(),
        )
    }

    /// Construct with explicit sleep and jitter functions so tests run
    /// without real waiting.
    pub fn with_timers(
        reader: Box<dyn AudioReader>,
        writer: Box<dyn SegmentWriter>,
        recognizer: Box<dyn SpeechRecognizer>,
        config: PipelineConfig,
        sleep: SleepFn,
        jitter: JitterFn,
    ) -> Self {
        Self {
            reader,
            writer,
            recognizer,
            config,
            sleep,
            jitter,
        }
    }

    pub fn run(&self, source: &Path) -> Result<String, PipelineError> {
        self.config.validate()?;

        if !source.exists() {
            return Err(PipelineError::FileNotFound(source.to_path_buf()));
        }

        fs::create_dir_all(&self.config.work_dir).map_err(|e| PipelineError::Io {
            path: self.config.work_dir.clone(),
            source: e,
        })?;

        // Temp files are cleaned up once at the end, on the success and
        // the failure path alike.
        let result = self.transcribe_chunks(source);
        self.cleanup_work_dir();
        result
    }

    fn transcribe_chunks(&self, source: &Path) -> Result<String, PipelineError> {
        let audio = self
            .reader
            .read_audio(source, TARGET_SAMPLE_RATE)?
            .ok_or_else(|| PipelineError::NoAudioTrack(source.to_path_buf()))?;

        let intermediate = self.config.work_dir.join(INTERMEDIATE_AUDIO_NAME);
        self.writer.write_segment(&intermediate, &audio)?;

        let windows = plan_windows(audio.duration(), self.config.chunk_length_secs as f64);
        log::info!(
            "transcribing {:.1}s of audio as {} chunk(s)",
            audio.duration(),
            windows.len()
        );

        let policy = RetryPolicy {
            retries: self.config.retries,
            delay_base: Duration::from_secs(self.config.delay_base_secs),
        };

        let mut fragments = Vec::with_capacity(windows.len());
        for window in &windows {
            let segment = audio.slice(window.start, window.end);
            let artifact = self.config.work_dir.join(window.artifact_name());
            self.writer.write_segment(&artifact, &segment)?;

            log::debug!("transcribing {}", artifact.display());
            let text = transcribe_with_retry(
                self.recognizer.as_ref(),
                &artifact,
                &policy,
                &self.sleep,
                &self.jitter,
            );
            fragments.push(text);
        }

        Ok(fragments.join(" "))
    }

    /// Remove every file in the work dir, then the dir itself if empty.
    /// Best-effort: cleanup trouble is logged, never propagated.
    fn cleanup_work_dir(&self) {
        let work_dir = &self.config.work_dir;
        match fs::read_dir(work_dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    if let Err(e) = fs::remove_file(entry.path()) {
                        log::warn!("could not remove {}: {e}", entry.path().display());
                    }
                }
            }
            Err(e) => {
                log::warn!("could not list {}: {e}", work_dir.display());
                return;
            }
        }
        if let Err(e) = fs::remove_dir(work_dir) {
            log::warn!("could not remove {}: {e}", work_dir.display());
        }
    }
}
