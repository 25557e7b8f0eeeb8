//! Download the audio track of a hosted video and convert it to a short
//! 16 kHz mono PCM WAV file with ffmpeg.

use std::path::Path;

pub mod fetch {
    pub mod domain {
        pub mod media_fetcher;
        pub mod source_locator;
    }
    pub mod infrastructure;
}

pub mod transcode {
    pub mod domain {
        pub mod transcoder;
        pub mod wav_profile;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod extract_audio_use_case;
    pub mod pipeline_logger;
}

pub mod shared {
    pub mod constants;
    pub mod request;
}

use fetch::infrastructure::youtube_fetcher::YoutubeFetcher;
use pipeline::extract_audio_use_case::{ExtractAudioUseCase, ExtractOutcome};
use pipeline::pipeline_logger::{NullPipelineLogger, PipelineLogger};
use shared::request::ExtractRequest;
use transcode::infrastructure::ffmpeg_transcoder::FfmpegTranscoder;
use transcode::infrastructure::wav_probe;

/// Wire the production fetcher and transcoder around `logger`.
///
/// The transcoder binary honours `$YTWAV_FFMPEG`.
pub fn default_use_case(logger: Box<dyn PipelineLogger>) -> ExtractAudioUseCase {
    ExtractAudioUseCase::new(
        Box::new(YoutubeFetcher::new()),
        Box::new(FfmpegTranscoder::from_env()),
        logger,
    )
}

/// Log the produced file's header and the success line.
pub fn report_success(outcome: &ExtractOutcome) {
    wav_probe::log_summary(&outcome.output, &outcome.profile);
    log::info!(
        "Successfully extracted audio to {}",
        outcome.output.display()
    );
}

/// Convert one video's audio to `output_path`, capped at `duration_secs`.
///
/// Every failure is logged and reported as `false`; nothing panics.
pub fn run(identifier: &str, output_path: &Path, duration_secs: u32) -> bool {
    let request = match ExtractRequest::new(identifier, output_path, duration_secs) {
        Ok(r) => r,
        Err(e) => {
            log::error!("Invalid request: {e}");
            return false;
        }
    };

    match default_use_case(Box::new(NullPipelineLogger)).execute(&request) {
        Ok(outcome) => {
            report_success(&outcome);
            true
        }
        Err(e) => {
            log::error!("Audio extraction failed: {e}");
            false
        }
    }
}
