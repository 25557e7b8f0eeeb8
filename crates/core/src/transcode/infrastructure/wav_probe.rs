use std::path::Path;

use crate::transcode::domain::wav_profile::WavProfile;

/// Header facts read back from a produced WAV file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WavSummary {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub duration_secs: f64,
}

impl WavSummary {
    pub fn matches(&self, profile: &WavProfile) -> bool {
        self.channels == profile.channels
            && self.sample_rate == profile.sample_rate
            && self.bits_per_sample == profile.bits_per_sample
    }
}

/// Read the WAV header at `path` without decoding samples.
pub fn probe_wav(path: &Path) -> Result<WavSummary, hound::Error> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let frames = reader.duration();
    let duration_secs = if spec.sample_rate > 0 {
        frames as f64 / spec.sample_rate as f64
    } else {
        0.0
    };

    Ok(WavSummary {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        duration_secs,
    })
}

/// Log what was written. Probe problems are reported but never fatal.
pub fn log_summary(path: &Path, profile: &WavProfile) -> Option<WavSummary> {
    match probe_wav(path) {
        Ok(summary) => {
            log::info!(
                "{}: {} ch, {} Hz, {}-bit, {:.1}s",
                path.display(),
                summary.channels,
                summary.sample_rate,
                summary.bits_per_sample,
                summary.duration_secs
            );
            if !summary.matches(profile) {
                log::warn!(
                    "{} does not match the requested {} Hz / {} ch / {}-bit profile",
                    path.display(),
                    profile.sample_rate,
                    profile.channels,
                    profile.bits_per_sample
                );
            }
            Some(summary)
        }
        Err(e) => {
            log::warn!("Could not read WAV header of {}: {e}", path.display());
            None
        }
    }
}
