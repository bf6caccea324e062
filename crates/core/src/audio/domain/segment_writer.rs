use std::path::Path;

use super::audio_segment::AudioSegment;
use crate::shared::error::PipelineError;

/// Domain interface for materializing an audio segment as a file on disk.
///
/// Used for both the full-length intermediate file and each chunk artifact.
pub trait SegmentWriter: Send {
    fn write_segment(&self, path: &Path, audio: &AudioSegment) -> Result<(), PipelineError>;
}
