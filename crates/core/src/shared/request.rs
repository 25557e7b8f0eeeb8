use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{TEMP_EXTENSION, TEMP_SUFFIX};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("identifier must not be empty")]
    EmptyIdentifier,
    #[error("identifier must not contain whitespace, got {0:?}")]
    WhitespaceInIdentifier(String),
    #[error("output path must not be empty")]
    EmptyOutputPath,
    #[error("output path has no file name: {}", .0.display())]
    NoFileName(PathBuf),
    #[error("duration must be a positive number of seconds")]
    ZeroDuration,
}

/// One conversion job: which video, where the WAV goes, and how long it may be.
///
/// Built once from the command line and consumed by a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractRequest {
    identifier: String,
    output_path: PathBuf,
    duration_secs: u32,
}

impl ExtractRequest {
    pub fn new(
        identifier: impl Into<String>,
        output_path: impl Into<PathBuf>,
        duration_secs: u32,
    ) -> Result<Self, RequestError> {
        let identifier = identifier.into();
        let output_path = output_path.into();

        if identifier.is_empty() {
            return Err(RequestError::EmptyIdentifier);
        }
        if identifier.chars().any(char::is_whitespace) {
            return Err(RequestError::WhitespaceInIdentifier(identifier));
        }
        if output_path.as_os_str().is_empty() {
            return Err(RequestError::EmptyOutputPath);
        }
        if output_path.file_name().is_none() {
            return Err(RequestError::NoFileName(output_path));
        }
        if duration_secs == 0 {
            return Err(RequestError::ZeroDuration);
        }

        Ok(Self {
            identifier,
            output_path,
            duration_secs,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Where the raw stream is downloaded before conversion.
    pub fn temp_path(&self) -> PathBuf {
        temp_path_for(&self.output_path)
    }
}

/// Sibling of `output` named `<stem>_temp.mp4`.
///
/// `/tmp/out.wav` becomes `/tmp/out_temp.mp4`. The result never equals
/// `output` because the stem always gains the suffix.
pub fn temp_path_for(output: &Path) -> PathBuf {
    let mut name = output.file_stem().unwrap_or_default().to_os_string();
    name.push(TEMP_SUFFIX);
    name.push(".");
    name.push(TEMP_EXTENSION);
    output.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_request_keeps_fields() {
        let req = ExtractRequest::new("abc123", "/tmp/out.wav", 180).unwrap();
        assert_eq!(req.identifier(), "abc123");
        assert_eq!(req.output_path(), Path::new("/tmp/out.wav"));
        assert_eq!(req.duration_secs(), 180);
    }

    #[test]
    fn test_temp_path_for_wav_output() {
        let req = ExtractRequest::new("abc123", "/tmp/out.wav", 180).unwrap();
        assert_eq!(req.temp_path(), PathBuf::from("/tmp/out_temp.mp4"));
    }

    #[rstest]
    #[case::no_extension("/tmp/out", "/tmp/out_temp.mp4")]
    #[case::relative("out.wav", "out_temp.mp4")]
    #[case::nested_dir("/data/audio/clip.wav", "/data/audio/clip_temp.mp4")]
    #[case::multiple_dots("/tmp/my.clip.wav", "/tmp/my.clip_temp.mp4")]
    #[case::already_mp4("/tmp/out.mp4", "/tmp/out_temp.mp4")]
    fn test_temp_path_same_directory(#[case] output: &str, #[case] expected: &str) {
        assert_eq!(temp_path_for(Path::new(output)), PathBuf::from(expected));
    }

    #[rstest]
    #[case::wav("/tmp/out.wav")]
    #[case::temp_named("/tmp/out_temp.mp4")]
    #[case::bare("x")]
    fn test_temp_path_never_equals_output(#[case] output: &str) {
        let output = Path::new(output);
        assert_ne!(temp_path_for(output), output);
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let err = ExtractRequest::new("", "/tmp/out.wav", 10).unwrap_err();
        assert_eq!(err, RequestError::EmptyIdentifier);
    }

    #[test]
    fn test_whitespace_identifier_rejected() {
        let err = ExtractRequest::new("abc 123", "/tmp/out.wav", 10).unwrap_err();
        assert!(matches!(err, RequestError::WhitespaceInIdentifier(_)));
    }

    #[test]
    fn test_empty_output_rejected() {
        let err = ExtractRequest::new("abc123", "", 10).unwrap_err();
        assert_eq!(err, RequestError::EmptyOutputPath);
    }

    #[test]
    fn test_root_output_rejected() {
        let err = ExtractRequest::new("abc123", "/", 10).unwrap_err();
        assert!(matches!(err, RequestError::NoFileName(_)));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = ExtractRequest::new("abc123", "/tmp/out.wav", 0).unwrap_err();
        assert_eq!(err, RequestError::ZeroDuration);
    }
}
