use crate::shared::constants::{WAV_BITS_PER_SAMPLE, WAV_CHANNELS, WAV_CODEC, WAV_SAMPLE_RATE};

/// Target PCM layout of the produced WAV file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WavProfile {
    pub codec: &'static str,
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl WavProfile {
    /// Signed 16-bit little-endian PCM, 16 kHz, mono.
    pub const fn speech() -> Self {
        Self {
            codec: WAV_CODEC,
            sample_rate: WAV_SAMPLE_RATE,
            channels: WAV_CHANNELS,
            bits_per_sample: WAV_BITS_PER_SAMPLE,
        }
    }
}

impl Default for WavProfile {
    fn default() -> Self {
        Self::speech()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_profile() {
        let p = WavProfile::speech();
        assert_eq!(p.codec, "pcm_s16le");
        assert_eq!(p.sample_rate, 16000);
        assert_eq!(p.channels, 1);
        assert_eq!(p.bits_per_sample, 16);
    }

    #[test]
    fn test_default_is_speech() {
        assert_eq!(WavProfile::default(), WavProfile::speech());
    }
}
