pub mod audio_segment;
pub mod chunk;
pub mod retry;
pub mod segment_writer;
pub mod speech_recognizer;
