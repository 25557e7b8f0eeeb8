use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use super::wav_profile::WavProfile;

#[derive(Error, Debug)]
pub enum TranscodeError {
    #[error("invalid transcode job: {0}")]
    InvalidJob(&'static str),
    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("transcoder exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
    #[error("transcoder reported success but {} was not written", path.display())]
    MissingOutput { path: PathBuf },
}

/// Convert `input` into a WAV at `output`, cut to at most `max_duration_secs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscodeJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub max_duration_secs: u32,
    pub profile: WavProfile,
}

/// Domain interface for converting a downloaded stream into the WAV profile.
pub trait Transcoder: Send {
    /// Run the conversion to completion, overwriting any existing output.
    fn transcode(&self, job: &TranscodeJob) -> Result<(), TranscodeError>;
}
