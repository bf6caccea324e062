/// A stretch of decoded audio: PCM samples normalized to [-1.0, 1.0].
///
/// The pipeline always decodes to mono, but channel count is carried so the
/// duration math stays honest if that ever changes.
#[derive(Clone, Debug)]
pub struct AudioSegment {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl AudioSegment {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Total length in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }

    fn sample_index_at_time(&self, time: f64) -> usize {
        (time * self.sample_rate as f64 * self.channels as f64) as usize
    }

    /// Copy out the half-open time window `[start_secs, end_secs)`,
    /// clamped to the segment's length.
    pub fn slice(&self, start_secs: f64, end_secs: f64) -> AudioSegment {
        let start = self.sample_index_at_time(start_secs).min(self.samples.len());
        let end = self
            .sample_index_at_time(end_secs)
            .clamp(start, self.samples.len());
        AudioSegment::new(
            self.samples[start..end].to_vec(),
            self.sample_rate,
            self.channels,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_duration_mono() {
        let seg = AudioSegment::new(vec![0.0; 48000], 16000, 1);
        assert_relative_eq!(seg.duration(), 3.0);
    }

    #[test]
    fn test_duration_stereo() {
        let seg = AudioSegment::new(vec![0.0; 96000], 48000, 2);
        assert_relative_eq!(seg.duration(), 1.0);
    }

    #[test]
    fn test_slice_copies_window() {
        let mut samples = vec![0.0f32; 1000];
        samples[100] = 0.5;
        let seg = AudioSegment::new(samples, 100, 1);
        let chunk = seg.slice(1.0, 3.0);
        assert_eq!(chunk.samples().len(), 200);
        assert_eq!(chunk.samples()[0], 0.5);
        assert_relative_eq!(chunk.duration(), 2.0);
    }

    #[test]
    fn test_slice_clamps_past_end() {
        let seg = AudioSegment::new(vec![0.0; 650], 100, 1);
        let chunk = seg.slice(6.0, 30.0);
        assert_eq!(chunk.samples().len(), 50);
    }

    #[test]
    fn test_slice_empty_window() {
        let seg = AudioSegment::new(vec![0.0; 100], 100, 1);
        let chunk = seg.slice(1.0, 1.0);
        assert!(chunk.samples().is_empty());
    }
}
