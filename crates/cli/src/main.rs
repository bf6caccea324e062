use std::path::PathBuf;
use std::process;

use clap::Parser;

use videoscribe_core::audio::infrastructure::http_recognizer::HttpSpeechRecognizer;
use videoscribe_core::audio::infrastructure::wav_segment_writer::WavSegmentWriter;
use videoscribe_core::pipeline::config::PipelineConfig;
use videoscribe_core::pipeline::transcribe_video_use_case::TranscribeVideoUseCase;
use videoscribe_core::shared::constants::{
    DEFAULT_CHUNK_LENGTH_SECS, DEFAULT_DELAY_BASE_SECS, DEFAULT_ENDPOINT, DEFAULT_RETRIES,
    DEFAULT_WORK_DIR,
};
use videoscribe_core::shared::error::PipelineError;
use videoscribe_core::video::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;

/// Transcribe the audio track of a video file via a remote speech service.
#[derive(Parser)]
#[command(name = "videoscribe")]
struct Cli {
    /// Input video file.
    #[arg(default_value = "videos/video.mp4")]
    input: PathBuf,

    /// Seconds of audio per transcription chunk.
    #[arg(long, default_value_t = DEFAULT_CHUNK_LENGTH_SECS)]
    chunk_length: u32,

    /// Attempts per chunk before giving up on the speech service.
    #[arg(long, default_value_t = DEFAULT_RETRIES)]
    retries: u32,

    /// Base backoff delay between attempts, in seconds.
    #[arg(long, default_value_t = DEFAULT_DELAY_BASE_SECS)]
    delay: u64,

    /// Working directory for temporary chunk files.
    #[arg(long, default_value = DEFAULT_WORK_DIR)]
    work_dir: PathBuf,

    /// Speech service endpoint.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Bearer token for the speech service, if it needs one.
    #[arg(long, env = "VIDEOSCRIBE_API_KEY")]
    api_key: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(transcript) => {
            println!("\nThe resultant text from video is: \n");
            println!("{transcript}");
        }
        Err(PipelineError::FileNotFound(_)) => {
            println!("The video file was not found.");
            process::exit(1);
        }
        Err(e) => {
            println!("An error occurred: {e}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String, PipelineError> {
    log::info!("transcribing {}", cli.input.display());

    let config = PipelineConfig {
        chunk_length_secs: cli.chunk_length,
        retries: cli.retries,
        delay_base_secs: cli.delay,
        work_dir: cli.work_dir,
    };

    let use_case = TranscribeVideoUseCase::new(
        Box::new(FfmpegAudioReader),
        Box::new(WavSegmentWriter),
        Box::new(HttpSpeechRecognizer::new(cli.endpoint, cli.api_key)),
        config,
    );
    use_case.run(&cli.input)
}
