pub mod config;
pub mod transcribe_video_use_case;
