use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::shared::constants::{FFMPEG_BINARY, FFMPEG_ENV};
use crate::transcode::domain::transcoder::{TranscodeError, TranscodeJob, Transcoder};
use crate::transcode::infrastructure::ffmpeg_args::FfmpegArgs;

/// Runs the ffmpeg binary as a child process and waits for it to exit.
///
/// stderr is captured so a failed conversion can report ffmpeg's own
/// diagnostics; stdout is discarded.
pub struct FfmpegTranscoder {
    program: PathBuf,
}

impl FfmpegTranscoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use `$YTWAV_FFMPEG` when set and non-empty, otherwise `ffmpeg` from `PATH`.
    pub fn from_env() -> Self {
        Self::new(program_from(std::env::var_os(FFMPEG_ENV)))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new(FFMPEG_BINARY)
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, job: &TranscodeJob) -> Result<(), TranscodeError> {
        let args = FfmpegArgs::for_job(job)?;
        log::debug!("Running {} {}", self.program.display(), args.display());

        let output = Command::new(&self.program)
            .args(args.as_slice())
            .stdin(Stdio::null())
            .output()
            .map_err(|source| TranscodeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TranscodeError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

fn program_from(value: Option<OsString>) -> PathBuf {
    value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(FFMPEG_BINARY))
}
