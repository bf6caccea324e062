use std::path::PathBuf;

use crate::shared::constants::{
    DEFAULT_CHUNK_LENGTH_SECS, DEFAULT_DELAY_BASE_SECS, DEFAULT_RETRIES, DEFAULT_WORK_DIR,
};
use crate::shared::error::PipelineError;

/// Tunables for one transcription run.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Seconds of audio per chunk. Must be positive.
    pub chunk_length_secs: u32,
    /// Attempts per chunk before giving up on the service. Must be at
    /// least 1.
    pub retries: u32,
    /// Base backoff delay between attempts, in seconds.
    pub delay_base_secs: u64,
    /// Directory the chunk artifacts and the intermediate audio file live
    /// in for the duration of the run.
    pub work_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_length_secs: DEFAULT_CHUNK_LENGTH_SECS,
            retries: DEFAULT_RETRIES,
            delay_base_secs: DEFAULT_DELAY_BASE_SECS,
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.chunk_length_secs == 0 {
            return Err(PipelineError::InvalidConfig(
                "chunk length must be positive".to_string(),
            ));
        }
        if self.retries == 0 {
            return Err(PipelineError::InvalidConfig(
                "retries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
