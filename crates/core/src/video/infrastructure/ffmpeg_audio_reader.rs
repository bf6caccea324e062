use std::path::Path;

use crate::audio::domain::audio_segment::AudioSegment;
use crate::shared::error::PipelineError;
use crate::video::domain::audio_reader::AudioReader;

/// Decodes the audio track of a video file using ffmpeg-next, resampling
/// to mono f32 at the requested rate.
pub struct FfmpegAudioReader;

impl AudioReader for FfmpegAudioReader {
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioSegment>, PipelineError> {
        if !path.exists() {
            return Err(PipelineError::FileNotFound(path.to_path_buf()));
        }

        let decode = |source: ffmpeg_next::Error| PipelineError::Decode {
            path: path.to_path_buf(),
            source,
        };

        ffmpeg_next::init().map_err(decode)?;

        let mut ictx = ffmpeg_next::format::input(path).map_err(decode)?;

        let audio_stream = match ictx.streams().best(ffmpeg_next::media::Type::Audio) {
            Some(stream) => stream,
            None => return Ok(None),
        };

        let audio_stream_index = audio_stream.index();
        let codec_ctx =
            ffmpeg_next::codec::context::Context::from_parameters(audio_stream.parameters())
                .map_err(decode)?;
        let mut decoder = codec_ctx.decoder().audio().map_err(decode)?;

        let mut resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Planar),
            ffmpeg_next::ChannelLayout::MONO,
            target_sample_rate,
        )
        .map_err(decode)?;

        let mut samples: Vec<f32> = Vec::new();
        let mut decoded = ffmpeg_next::util::frame::audio::Audio::empty();
        let mut resampled = ffmpeg_next::util::frame::audio::Audio::empty();

        for (stream, packet) in ictx.packets() {
            if stream.index() != audio_stream_index {
                continue;
            }
            decoder.send_packet(&packet).map_err(decode)?;
            while decoder.receive_frame(&mut decoded).is_ok() {
                resampler.run(&decoded, &mut resampled).map_err(decode)?;
                collect_f32_samples(&resampled, &mut samples);
            }
        }

        // Flush the decoder
        decoder.send_eof().map_err(decode)?;
        while decoder.receive_frame(&mut decoded).is_ok() {
            resampler.run(&decoded, &mut resampled).map_err(decode)?;
            collect_f32_samples(&resampled, &mut samples);
        }

        // Flush the resampler (may have buffered samples)
        if let Ok(Some(delay)) = resampler.flush(&mut resampled) {
            if delay.output > 0 {
                collect_f32_samples(&resampled, &mut samples);
            }
        }

        log::debug!(
            "decoded {:.1}s of audio from {}",
            samples.len() as f64 / target_sample_rate as f64,
            path.display()
        );

        Ok(Some(AudioSegment::new(samples, target_sample_rate, 1)))
    }
}

/// Append the f32 samples of a planar mono frame.
fn collect_f32_samples(frame: &ffmpeg_next::util::frame::audio::Audio, out: &mut Vec<f32>) {
    let num_samples = frame.samples();
    if num_samples == 0 {
        return;
    }
    let data = frame.data(0);
    let floats = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, num_samples) };
    out.extend_from_slice(floats);
}
