pub mod ffmpeg_args;
pub mod ffmpeg_transcoder;
pub mod wav_probe;
