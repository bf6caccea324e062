use std::path::Path;

use crate::audio::domain::audio_segment::AudioSegment;
use crate::shared::error::PipelineError;

/// Domain interface for pulling the audio track out of a video container.
///
/// Returns `None` when the container holds no audio stream; decode trouble
/// is a `PipelineError::Decode`.
pub trait AudioReader: Send {
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioSegment>, PipelineError>;
}
