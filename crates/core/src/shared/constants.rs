/// Watch page template; `{id}` is replaced with the video identifier.
pub const WATCH_URL_TEMPLATE: &str = "https://www.youtube.com/watch?v={id}";

pub const FFMPEG_BINARY: &str = "ffmpeg";

/// Overrides the transcoder binary (path or name on `PATH`).
pub const FFMPEG_ENV: &str = "YTWAV_FFMPEG";

/// Appended to the output file stem to name the downloaded stream.
pub const TEMP_SUFFIX: &str = "_temp";
pub const TEMP_EXTENSION: &str = "mp4";

pub const WAV_CODEC: &str = "pcm_s16le";
pub const WAV_SAMPLE_RATE: u32 = 16000;
pub const WAV_CHANNELS: u16 = 1;
pub const WAV_BITS_PER_SAMPLE: u16 = 16;

pub const STAGE_FETCH: &str = "fetch";
pub const STAGE_TRANSCODE: &str = "transcode";
