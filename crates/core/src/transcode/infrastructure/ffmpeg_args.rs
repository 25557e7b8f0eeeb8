use std::ffi::OsString;

use crate::transcode::domain::transcoder::{TranscodeError, TranscodeJob};

/// Argument list for a single ffmpeg conversion, checked before anything runs.
///
/// Layout: `-y -i <input> -t <secs> -acodec <codec> -ar <rate> -ac <channels> <output>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FfmpegArgs {
    args: Vec<OsString>,
}

impl FfmpegArgs {
    pub fn for_job(job: &TranscodeJob) -> Result<Self, TranscodeError> {
        if job.max_duration_secs == 0 {
            return Err(TranscodeError::InvalidJob("duration must be positive"));
        }
        if job.input.as_os_str().is_empty() {
            return Err(TranscodeError::InvalidJob("input path is empty"));
        }
        if job.output.as_os_str().is_empty() {
            return Err(TranscodeError::InvalidJob("output path is empty"));
        }
        if job.input == job.output {
            return Err(TranscodeError::InvalidJob(
                "input and output must be different files",
            ));
        }

        let profile = &job.profile;
        let args = vec![
            OsString::from("-y"),
            OsString::from("-i"),
            job.input.clone().into_os_string(),
            OsString::from("-t"),
            OsString::from(job.max_duration_secs.to_string()),
            OsString::from("-acodec"),
            OsString::from(profile.codec),
            OsString::from("-ar"),
            OsString::from(profile.sample_rate.to_string()),
            OsString::from("-ac"),
            OsString::from(profile.channels.to_string()),
            job.output.clone().into_os_string(),
        ];
        Ok(Self { args })
    }

    pub fn as_slice(&self) -> &[OsString] {
        &self.args
    }

    /// Space-joined rendering for logs. Not shell-quoted.
    pub fn display(&self) -> String {
        self.args
            .iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcode::domain::wav_profile::WavProfile;
    use std::path::PathBuf;

    fn job(input: &str, output: &str, secs: u32) -> TranscodeJob {
        TranscodeJob {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            max_duration_secs: secs,
            profile: WavProfile::speech(),
        }
    }

    #[test]
    fn test_fixed_argument_profile() {
        let args = FfmpegArgs::for_job(&job("/tmp/out_temp.mp4", "/tmp/out.wav", 180)).unwrap();
        let expected: Vec<OsString> = [
            "-y",
            "-i",
            "/tmp/out_temp.mp4",
            "-t",
            "180",
            "-acodec",
            "pcm_s16le",
            "-ar",
            "16000",
            "-ac",
            "1",
            "/tmp/out.wav",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_output_is_last_argument() {
        let args = FfmpegArgs::for_job(&job("in.mp4", "dir/out.wav", 5)).unwrap();
        assert_eq!(args.as_slice().last().unwrap(), "dir/out.wav");
    }

    #[test]
    fn test_display_joins_arguments() {
        let args = FfmpegArgs::for_job(&job("a.mp4", "b.wav", 30)).unwrap();
        assert_eq!(
            args.display(),
            "-y -i a.mp4 -t 30 -acodec pcm_s16le -ar 16000 -ac 1 b.wav"
        );
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result = FfmpegArgs::for_job(&job("a.mp4", "b.wav", 0));
        assert!(matches!(result, Err(TranscodeError::InvalidJob(_))));
    }

    #[test]
    fn test_empty_paths_rejected() {
        assert!(matches!(
            FfmpegArgs::for_job(&job("", "b.wav", 1)),
            Err(TranscodeError::InvalidJob(_))
        ));
        assert!(matches!(
            FfmpegArgs::for_job(&job("a.mp4", "", 1)),
            Err(TranscodeError::InvalidJob(_))
        ));
    }

    #[test]
    fn test_same_input_and_output_rejected() {
        let result = FfmpegArgs::for_job(&job("x.wav", "x.wav", 10));
        assert!(matches!(result, Err(TranscodeError::InvalidJob(_))));
    }
}
