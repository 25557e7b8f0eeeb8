use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tempfile::TempPath;
use thiserror::Error;

use crate::fetch::domain::media_fetcher::{
    select_audio_stream, FetchError, MediaFetcher, StreamDescriptor,
};
use crate::fetch::domain::source_locator::SourceLocator;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::constants::{STAGE_FETCH, STAGE_TRANSCODE};
use crate::shared::request::{ExtractRequest, RequestError};
use crate::transcode::domain::transcoder::{TranscodeError, TranscodeJob, Transcoder};
use crate::transcode::domain::wav_profile::WavProfile;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("invalid request: {0}")]
    Usage(#[from] RequestError),
    #[error("no audio stream available for {url}")]
    NoAudioStream { url: String },
    #[error("fetch failed: {0}")]
    Fetch(#[source] FetchError),
    #[error("transcode failed: {0}")]
    Transcode(#[from] TranscodeError),
}

impl From<FetchError> for ExtractError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::NoAudioStream { url } => ExtractError::NoAudioStream { url },
            other => ExtractError::Fetch(other),
        }
    }
}

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOutcome {
    pub output: PathBuf,
    pub stream_itag: u64,
    pub profile: WavProfile,
}

/// Fetch → transcode → clean up, for one request.
///
/// The downloaded stream lives at the request's temp path only for the
/// duration of `execute`; it is removed on every exit path, including
/// failed downloads and failed conversions.
pub struct ExtractAudioUseCase {
    fetcher: Box<dyn MediaFetcher>,
    transcoder: Box<dyn Transcoder>,
    logger: Box<dyn PipelineLogger>,
    profile: WavProfile,
}

impl ExtractAudioUseCase {
    pub fn new(
        fetcher: Box<dyn MediaFetcher>,
        transcoder: Box<dyn Transcoder>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            fetcher,
            transcoder,
            logger,
            profile: WavProfile::speech(),
        }
    }

    pub fn execute(&mut self, request: &ExtractRequest) -> Result<ExtractOutcome, ExtractError> {
        let locator = SourceLocator::from_identifier(request.identifier());
        self.logger.info(&format!("Fetching audio for {locator}"));

        let fetch_start = Instant::now();
        let streams = self.fetcher.list_streams(&locator)?;
        let stream = select_audio_stream(&streams)
            .ok_or_else(|| FetchError::NoAudioStream {
                url: locator.url().to_string(),
            })?
            .clone();
        log::debug!(
            "Selected stream {} ({} bps audio) out of {}",
            stream.itag,
            stream.audio_bitrate.unwrap_or(0),
            streams.len()
        );

        // Everything below must leave no temp file behind.
        let temp = TempPath::from_path(request.temp_path());
        let converted =
            self.download_and_transcode(&locator, &stream, &temp, request, fetch_start);
        remove_temp(temp);
        converted?;

        let output = request.output_path();
        if !output.exists() {
            return Err(TranscodeError::MissingOutput {
                path: output.to_path_buf(),
            }
            .into());
        }

        self.logger.info(&format!("Wrote {}", output.display()));
        self.logger.summary();
        Ok(ExtractOutcome {
            output: output.to_path_buf(),
            stream_itag: stream.itag,
            profile: self.profile,
        })
    }

    fn download_and_transcode(
        &mut self,
        locator: &SourceLocator,
        stream: &StreamDescriptor,
        temp: &Path,
        request: &ExtractRequest,
        fetch_start: Instant,
    ) -> Result<(), ExtractError> {
        self.fetcher.download(locator, stream, temp)?;
        self.logger
            .timing(STAGE_FETCH, fetch_start.elapsed().as_secs_f64() * 1000.0);

        let job = TranscodeJob {
            input: temp.to_path_buf(),
            output: request.output_path().to_path_buf(),
            max_duration_secs: request.duration_secs(),
            profile: self.profile,
        };
        self.logger.info(&format!(
            "Converting to {} Hz mono WAV, max {}s",
            job.profile.sample_rate, job.max_duration_secs
        ));

        let transcode_start = Instant::now();
        let result = self.transcoder.transcode(&job);
        self.logger.timing(
            STAGE_TRANSCODE,
            transcode_start.elapsed().as_secs_f64() * 1000.0,
        );
        result?;
        Ok(())
    }
}

fn remove_temp(temp: TempPath) {
    let path = temp.to_path_buf();
    match temp.close() {
        Ok(()) => log::debug!("Removed {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Could not remove temporary file {}: {e}", path.display()),
    }
}
