use std::cmp::Reverse;
use std::path::Path;

use thiserror::Error;

use super::source_locator::SourceLocator;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("no audio stream available for {url}")]
    NoAudioStream { url: String },
    #[error("failed to list streams for {url}: {source}")]
    Listing {
        url: String,
        #[source]
        source: BoxedError,
    },
    #[error("failed to download stream {itag} from {url}: {source}")]
    Download {
        url: String,
        itag: u64,
        #[source]
        source: BoxedError,
    },
}

/// One stream the host offers for a video, independent of the client library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamDescriptor {
    pub itag: u64,
    pub has_audio: bool,
    pub has_video: bool,
    pub bitrate: u64,
    pub audio_bitrate: Option<u64>,
}

impl StreamDescriptor {
    pub fn is_audio_only(&self) -> bool {
        self.has_audio && !self.has_video
    }
}

/// Pick the audio-only stream with the highest audio bitrate.
///
/// Ties fall back to overall bitrate, then to list order.
pub fn select_audio_stream(streams: &[StreamDescriptor]) -> Option<&StreamDescriptor> {
    streams
        .iter()
        .filter(|s| s.is_audio_only())
        .min_by_key(|s| Reverse((s.audio_bitrate.unwrap_or(0), s.bitrate)))
}

/// Domain interface for retrieving media from a video host.
pub trait MediaFetcher: Send {
    /// List every stream the host offers for the video.
    fn list_streams(&self, locator: &SourceLocator) -> Result<Vec<StreamDescriptor>, FetchError>;

    /// Download one previously listed stream to `dest`, creating or truncating it.
    fn download(
        &self,
        locator: &SourceLocator,
        stream: &StreamDescriptor,
        dest: &Path,
    ) -> Result<(), FetchError>;
}
