use super::{
    config::Lc3Config,
    constants::{MAX_PITCH_INDEX, PITCH_MAX_12P8, PITCH_MIN_12P8},
};

/// A pitch lag at 12.8 khz with quarter sample precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchLag {
    /// integer part of the lag in samples (32 to 228)
    pub int: usize,

    /// fractional part in quarter samples (0 to 3)
    pub fr: usize,
}

impl PitchLag {
    pub const fn new(int: usize, fr: usize) -> Self {
        Self { int, fr }
    }

    /// Lag in quarter samples at 12.8 khz
    pub const fn quarter_samples(&self) -> usize {
        4 * self.int + self.fr
    }

    /// Maps the lag onto the 9 bit bitstream index.
    ///
    /// Resolution drops from a quarter sample for short lags, to half a sample from 127 and to
    /// whole samples from 157. Phases finer than the band allows are truncated.
    pub const fn to_index(&self) -> usize {
        debug_assert!(self.int >= PITCH_MIN_12P8 && self.int <= PITCH_MAX_12P8 && self.fr < 4);

        if self.int < 127 {
            4 * self.int + self.fr - 128
        } else if self.int < 157 {
            2 * self.int + (self.fr >> 1) + 126
        } else {
            self.int + 283
        }
    }

    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index <= MAX_PITCH_INDEX);

        if index >= 440 {
            Self::new(index - 283, 0)
        } else if index >= 380 {
            Self::new((index >> 1) - 63, (index & 1) << 1)
        } else {
            Self::new((index >> 2) + 32, index & 3)
        }
    }

    /// Converts the lag to quarter samples at the native sampling frequency (rounded)
    pub const fn quarter_samples_at(&self, config: &Lc3Config) -> usize {
        (self.quarter_samples() * config.fs_khz() * 10 + 64) / 128
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::common::config::{FrameDuration, SamplingFrequency};

    fn round_trip(int: usize, fr: usize) {
        let lag = PitchLag::new(int, fr);
        assert_eq!(PitchLag::from_index(lag.to_index()), lag, "lag {}.{}", int, fr);
    }

    #[test]
    fn quarter_resolution_band_round_trips() {
        for int in 32..127 {
            for fr in 0..4 {
                round_trip(int, fr);
            }
        }
    }

    #[test]
    fn half_resolution_band_round_trips() {
        for int in 127..157 {
            for fr in [0, 2] {
                round_trip(int, fr);
            }
        }
    }

    #[test]
    fn integer_resolution_band_round_trips() {
        for int in 157..=228 {
            round_trip(int, 0);
        }
    }

    #[test]
    fn every_index_round_trips() {
        for index in 0..=MAX_PITCH_INDEX {
            assert_eq!(PitchLag::from_index(index).to_index(), index);
        }
    }

    #[test]
    fn encode_band_boundaries() {
        assert_eq!(PitchLag::new(32, 0).to_index(), 0);
        assert_eq!(PitchLag::new(126, 0).to_index(), 376);
        assert_eq!(PitchLag::new(126, 3).to_index(), 379);
        assert_eq!(PitchLag::new(127, 0).to_index(), 380);
        assert_eq!(PitchLag::new(127, 2).to_index(), 381);
        assert_eq!(PitchLag::new(156, 0).to_index(), 438);
        assert_eq!(PitchLag::new(156, 2).to_index(), 439);
        assert_eq!(PitchLag::new(157, 0).to_index(), 440);
        assert_eq!(PitchLag::new(228, 0).to_index(), 511);
    }

    #[test]
    fn decode_band_boundaries() {
        assert_eq!(PitchLag::from_index(0), PitchLag::new(32, 0));
        assert_eq!(PitchLag::from_index(379), PitchLag::new(126, 3));
        assert_eq!(PitchLag::from_index(380), PitchLag::new(127, 0));
        assert_eq!(PitchLag::from_index(439), PitchLag::new(156, 2));
        assert_eq!(PitchLag::from_index(440), PitchLag::new(157, 0));
        assert_eq!(PitchLag::from_index(511), PitchLag::new(228, 0));
    }

    #[test]
    fn coarse_bands_drop_unrepresentable_phases() {
        assert_eq!(PitchLag::from_index(PitchLag::new(140, 3).to_index()), PitchLag::new(140, 2));
        assert_eq!(PitchLag::from_index(PitchLag::new(200, 1).to_index()), PitchLag::new(200, 0));
    }

    #[test]
    fn rescale_to_sampling_frequency() {
        let lag = PitchLag::new(80, 0);

        let config = Lc3Config::new(SamplingFrequency::Hz16000, FrameDuration::TenMs);
        assert_eq!(lag.quarter_samples_at(&config), 400);

        let config = Lc3Config::new(SamplingFrequency::Hz48000, FrameDuration::TenMs);
        assert_eq!(lag.quarter_samples_at(&config), 1200);

        let config = Lc3Config::new(SamplingFrequency::Hz8000, FrameDuration::TenMs);
        assert_eq!(lag.quarter_samples_at(&config), 200);
    }
}
