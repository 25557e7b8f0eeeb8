use std::path::Path;
use std::sync::Arc;

use rusty_ytdl::blocking::Video;
use rusty_ytdl::{VideoError, VideoFormat, VideoOptions, VideoQuality, VideoSearchOptions};

use crate::fetch::domain::media_fetcher::{FetchError, MediaFetcher, StreamDescriptor};
use crate::fetch::domain::source_locator::SourceLocator;

/// Lists and downloads streams using rusty_ytdl's blocking client.
///
/// The blocking client drives its own runtime internally, so callers stay
/// fully synchronous.
#[derive(Default)]
pub struct YoutubeFetcher;

impl YoutubeFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl MediaFetcher for YoutubeFetcher {
    fn list_streams(&self, locator: &SourceLocator) -> Result<Vec<StreamDescriptor>, FetchError> {
        let listing_error = |e: VideoError| FetchError::Listing {
            url: locator.url().to_string(),
            source: Box::new(e),
        };

        let video = Video::new(locator.url()).map_err(listing_error)?;
        let info = video.get_info().map_err(listing_error)?;
        log::debug!("{} offers {} streams", locator, info.formats.len());

        Ok(info.formats.iter().map(to_descriptor).collect())
    }

    fn download(
        &self,
        locator: &SourceLocator,
        stream: &StreamDescriptor,
        dest: &Path,
    ) -> Result<(), FetchError> {
        let itag = stream.itag;
        let download_error = |e: VideoError| FetchError::Download {
            url: locator.url().to_string(),
            itag,
            source: Box::new(e),
        };

        // Pin the download to the stream chosen from the listing.
        let options = VideoOptions {
            quality: VideoQuality::Highest,
            filter: VideoSearchOptions::Custom(Arc::new(move |format: &VideoFormat| {
                format.itag == itag
            })),
            ..Default::default()
        };

        let video = Video::new_with_options(locator.url(), options).map_err(download_error)?;
        video.download(dest).map_err(download_error)?;
        log::debug!("Stream {itag} written to {}", dest.display());
        Ok(())
    }
}

fn to_descriptor(format: &VideoFormat) -> StreamDescriptor {
    StreamDescriptor {
        itag: format.itag,
        has_audio: format.has_audio,
        has_video: format.has_video,
        bitrate: format.bitrate,
        audio_bitrate: format.audio_bitrate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::domain::media_fetcher::select_audio_stream;
    use tempfile::TempDir;

    #[test]
    #[ignore = "requires network access"]
    fn test_lists_and_downloads_audio_stream() {
        let fetcher = YoutubeFetcher::new();
        let locator = SourceLocator::from_identifier("jNQXAC9IVRw");

        let streams = fetcher.list_streams(&locator).unwrap();
        let chosen = select_audio_stream(&streams).expect("video should offer audio");

        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("clip_temp.mp4");
        fetcher.download(&locator, chosen, &dest).unwrap();
        assert!(dest.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_unknown_video_is_a_fetch_error() {
        // Identifiers rusty_ytdl cannot parse fail before any request is made.
        let fetcher = YoutubeFetcher::new();
        let locator = SourceLocator::from_identifier("!");
        let result = fetcher.list_streams(&locator);
        assert!(matches!(result, Err(FetchError::Listing { .. })));
    }
}
