use std::path::Path;

use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::segment_writer::SegmentWriter;
use crate::shared::error::PipelineError;

/// Writes audio segments as 16-bit PCM WAV files using hound.
pub struct WavSegmentWriter;

impl SegmentWriter for WavSegmentWriter {
    fn write_segment(&self, path: &Path, audio: &AudioSegment) -> Result<(), PipelineError> {
        let spec = hound::WavSpec {
            channels: audio.channels(),
            sample_rate: audio.sample_rate(),
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let wrap = |source: hound::Error| PipelineError::SegmentWrite {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = hound::WavWriter::create(path, spec).map_err(wrap)?;
        for &sample in audio.samples() {
            let quantized = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer.write_sample(quantized).map_err(wrap)?;
        }
        writer.finalize().map_err(wrap)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_produces_readable_wav() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("chunk_0_1.wav");
        let audio = AudioSegment::new(vec![0.0, 0.5, -0.5, 1.0], 16000, 1);

        WavSegmentWriter.write_segment(&path, &audio).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.sample_rate, 16000);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], 0);
        assert_eq!(samples[3], i16::MAX);
    }

    #[test]
    fn test_out_of_range_samples_are_clamped() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clipped.wav");
        let audio = AudioSegment::new(vec![2.0, -2.0], 16000, 1);

        WavSegmentWriter.write_segment(&path, &audio).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples[0], i16::MAX);
        assert_eq!(samples[1], -i16::MAX);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no_such_dir").join("chunk.wav");
        let audio = AudioSegment::new(vec![0.0; 16], 16000, 1);
        let result = WavSegmentWriter.write_segment(&path, &audio);
        assert!(result.is_err());
    }
}
