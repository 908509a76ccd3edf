use crate::{
    common::{
        config::Lc3Config,
        constants::{K_MAX, NMEM_12P8D},
        ltpf_data::{get_nbits, LtpfData},
        pitch_index::PitchLag,
        ring_buffer::HistoryBuffer,
        scaler::Scaler,
    },
    encoder::{
        activation_gate::ActivationGate,
        pitch_detection::PitchDetection,
        pitch_refinement::{normalized_correlation, refine_pitch},
        resampler::Resampler,
    },
};

/// Encoder side of the long term post filter for one channel
pub struct LongTermPostFilter<'a> {
    // constant
    config: Lc3Config,

    // state
    resampler: Resampler,
    x_s_extended: HistoryBuffer<'a>,
    x_12p8_extended: HistoryBuffer<'a>,
    x_6p4_extended: HistoryBuffer<'a>,
    pitch_detection: PitchDetection,
    activation_gate: ActivationGate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongTermPostFilterResult {
    pub pitch_present: bool,
    pub data: LtpfData,
    pub nbits_ltpf: usize,
}

struct LongTermPostFilterTempFields {
    x_s_extended_length: usize,
    x_12p8_extended_length: usize,
    x_6p4_extended_length: usize,
}

impl<'a> LongTermPostFilter<'a> {
    pub fn new(config: Lc3Config, scaler_buf: &'a mut [Scaler]) -> (Self, &'a mut [Scaler]) {
        let tmp = Self::calc_temp_fields(&config);
        let (x_s_extended, scaler_buf) = scaler_buf.split_at_mut(tmp.x_s_extended_length);
        let (x_12p8_extended, scaler_buf) = scaler_buf.split_at_mut(tmp.x_12p8_extended_length);
        let (x_6p4_extended, scaler_buf) = scaler_buf.split_at_mut(tmp.x_6p4_extended_length);

        (
            Self {
                config,
                resampler: Resampler::new(&config),
                x_s_extended: HistoryBuffer::new(x_s_extended),
                x_12p8_extended: HistoryBuffer::new(x_12p8_extended),
                x_6p4_extended: HistoryBuffer::new(x_6p4_extended),
                pitch_detection: PitchDetection::new(),
                activation_gate: ActivationGate::new(config.n_ms),
            },
            scaler_buf,
        )
    }

    fn calc_temp_fields(config: &Lc3Config) -> LongTermPostFilterTempFields {
        LongTermPostFilterTempFields {
            // e.g. 60 + 480
            x_s_extended_length: Resampler::look_back(config) + config.nf,

            // e.g. 232 + 24 + 128
            x_12p8_extended_length: NMEM_12P8D + config.delay_ltpf() + config.len12p8(),

            // e.g. 114 + 64
            x_6p4_extended_length: K_MAX + config.len6p4(),
        }
    }

    pub fn calc_working_buffer_length(config: &Lc3Config) -> usize {
        let tmp = Self::calc_temp_fields(config);
        tmp.x_s_extended_length + tmp.x_12p8_extended_length + tmp.x_6p4_extended_length
    }

    /// Analyses one frame and decides on the post filter parameters
    ///
    /// # Arguments
    ///
    /// * `x_s` - Input samples of the current frame (nf samples)
    /// * `near_nyquist_flag` - Raised by the encoder for frames with most energy close to nyquist
    /// * `nbytes` - Size of the encoded frame in bytes
    pub fn run(&mut self, x_s: &[Scaler], near_nyquist_flag: bool, nbytes: usize) -> LongTermPostFilterResult {
        let (pitch_present, mut data) = self.analyse(x_s);

        // the decoder cannot apply the filter at high bit rates so there is no point in signalling it
        let fd_us = self.config.frame_duration_us();
        let t_nbits = (nbytes * 8 * 10000 + fd_us / 2) / fd_us;
        let gain_ltpf_on = t_nbits < 560 + self.config.fs_ind * 80;
        if near_nyquist_flag || !gain_ltpf_on {
            data.disable();
        }

        LongTermPostFilterResult {
            pitch_present,
            data,
            nbits_ltpf: get_nbits(pitch_present),
        }
    }

    /// Runs resampling, pitch search and the activation decision on one frame.
    ///
    /// Returns whether a pitch is present and the post filter parameters. The pitch index is
    /// zero when no pitch is present.
    pub fn analyse(&mut self, x_s: &[Scaler]) -> (bool, LtpfData) {
        assert_eq!(x_s.len(), self.config.nf);
        let len12p8 = self.config.len12p8();
        let len6p4 = self.config.len6p4();

        // time domain signals
        self.x_s_extended.push(x_s);
        self.resampler
            .resample_12p8(self.x_s_extended.as_slice(), self.x_12p8_extended.shift_in(len12p8));

        // the analysis window lags the newest resampled sample by delay_ltpf
        let x_12p8 = self.x_12p8_extended.as_slice();
        Resampler::resample_6p4(&x_12p8[NMEM_12P8D - 3..], self.x_6p4_extended.shift_in(len6p4));

        // pitch detection
        let (t_coarse, pitch_present) = self.pitch_detection.run(self.x_6p4_extended.as_slice());

        // pitch lag parameter and the normalized correlation at that lag
        let (pitch, nc) = if pitch_present {
            let pitch = refine_pitch(x_12p8, NMEM_12P8D, len12p8, t_coarse);
            (pitch, normalized_correlation(x_12p8, NMEM_12P8D, len12p8, pitch))
        } else {
            (PitchLag::new(0, 0), 0.0)
        };

        // activation bit
        let active = self
            .activation_gate
            .decide(pitch_present, pitch.quarter_samples(), nc);

        let pitch_index = if pitch_present { pitch.to_index() } else { 0 };
        log::trace!(
            "ltpf analysis: present {} pitch {:?} nc {} active {}",
            pitch_present,
            pitch,
            nc,
            active
        );

        (pitch_present, LtpfData { active, pitch_index })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::common::config::{FrameDuration, SamplingFrequency};
    use std::vec;
    use std::vec::Vec;

    const ALL_SAMPLING_FREQUENCIES: [SamplingFrequency; 5] = [
        SamplingFrequency::Hz8000,
        SamplingFrequency::Hz16000,
        SamplingFrequency::Hz24000,
        SamplingFrequency::Hz32000,
        SamplingFrequency::Hz48000,
    ];

    const ALL_FRAME_DURATIONS: [FrameDuration; 2] = [FrameDuration::TenMs, FrameDuration::SevenPointFiveMs];

    // three decaying harmonics of f0
    fn voiced_frame(config: &Lc3Config, f0: f64, frame: usize) -> Vec<Scaler> {
        (0..config.nf)
            .map(|n| {
                let t = (frame * config.nf + n) as f64 / config.fs as f64;
                (0..3)
                    .map(|i| {
                        let h = (i + 1) as f64;
                        8000.0 / h * (2.0 * core::f64::consts::PI * h * f0 * t + 0.3 * i as f64).sin()
                    })
                    .sum::<f64>() as Scaler
            })
            .collect()
    }

    fn analyse_frames(config: Lc3Config, num_frames: usize, f0: f64) -> Vec<(bool, LtpfData)> {
        let mut scaler_buf = vec![0.0; LongTermPostFilter::calc_working_buffer_length(&config)];
        let (mut ltpf, rest) = LongTermPostFilter::new(config, &mut scaler_buf);
        assert!(rest.is_empty());

        (0..num_frames)
            .map(|frame| ltpf.analyse(&voiced_frame(&config, f0, frame)))
            .collect()
    }

    #[test]
    fn working_buffer_length() {
        let config = Lc3Config::new(SamplingFrequency::Hz48000, FrameDuration::TenMs);
        assert_eq!(LongTermPostFilter::calc_working_buffer_length(&config), 540 + 384 + 178);

        let config = Lc3Config::new(SamplingFrequency::Hz8000, FrameDuration::SevenPointFiveMs);
        assert_eq!(LongTermPostFilter::calc_working_buffer_length(&config), 70 + 372 + 162);
    }

    #[test]
    fn recovers_pitch_of_voiced_signal() {
        for lag in [40.0, 48.0, 64.0, 96.0] {
            for fs in ALL_SAMPLING_FREQUENCIES {
                for n_ms in ALL_FRAME_DURATIONS {
                    let config = Lc3Config::new(fs, n_ms);
                    let results = analyse_frames(config, 12, 12800.0 / lag);

                    for (frame, (pitch_present, data)) in results.iter().enumerate().skip(4) {
                        assert!(*pitch_present, "{:?} {:?} lag {} frame {}", fs, n_ms, lag, frame);
                        let pitch = data.pitch_lag().quarter_samples() as f64 / 4.0;
                        assert!((pitch - lag).abs() <= 1.0, "{:?} {:?} lag {} got {}", fs, n_ms, lag, pitch);
                    }
                }
            }
        }
    }

    #[test]
    fn voiced_signal_switches_filter_on() {
        for fs in ALL_SAMPLING_FREQUENCIES {
            for n_ms in ALL_FRAME_DURATIONS {
                let results = analyse_frames(Lc3Config::new(fs, n_ms), 10, 200.0);

                // the first frame never activates, activation then holds
                assert!(!results[0].1.active);
                assert!(results[5..].iter().all(|(_, data)| data.active), "{:?} {:?}", fs, n_ms);
            }
        }
    }

    #[test]
    fn silence_has_no_pitch() {
        for fs in ALL_SAMPLING_FREQUENCIES {
            for n_ms in ALL_FRAME_DURATIONS {
                let config = Lc3Config::new(fs, n_ms);
                let mut scaler_buf = vec![0.0; LongTermPostFilter::calc_working_buffer_length(&config)];
                let (mut ltpf, _) = LongTermPostFilter::new(config, &mut scaler_buf);
                let x_s = vec![0.0; config.nf];

                for _ in 0..4 {
                    let (pitch_present, data) = ltpf.analyse(&x_s);
                    assert!(!pitch_present);
                    assert_eq!(data, LtpfData::default());
                }
            }
        }
    }

    #[test]
    fn high_bit_rate_disables_filter() {
        let config = Lc3Config::new(SamplingFrequency::Hz16000, FrameDuration::TenMs);
        let mut scaler_buf = vec![0.0; LongTermPostFilter::calc_working_buffer_length(&config)];
        let (mut ltpf, _) = LongTermPostFilter::new(config, &mut scaler_buf);

        // 640 bits is the limit at 16khz
        let results: Vec<LongTermPostFilterResult> = (0..6)
            .map(|frame| {
                let nbytes = if frame == 5 { 80 } else { 79 };
                ltpf.run(&voiced_frame(&config, 200.0, frame), false, nbytes)
            })
            .collect();

        assert!(results[4].data.active);
        assert!(results[5].pitch_present);
        assert_eq!(results[5].nbits_ltpf, 11);
        assert!(!results[5].data.active);
        assert_eq!(results[5].data.pitch_index, results[4].data.pitch_index);
    }

    #[test]
    fn near_nyquist_disables_filter() {
        let config = Lc3Config::new(SamplingFrequency::Hz48000, FrameDuration::SevenPointFiveMs);
        let mut scaler_buf = vec![0.0; LongTermPostFilter::calc_working_buffer_length(&config)];
        let (mut ltpf, _) = LongTermPostFilter::new(config, &mut scaler_buf);

        let results: Vec<LongTermPostFilterResult> = (0..8)
            .map(|frame| ltpf.run(&voiced_frame(&config, 200.0, frame), frame == 7, 40))
            .collect();

        assert!(results[6].data.active);
        assert!(results[7].pitch_present);
        assert!(!results[7].data.active);
    }

    #[test]
    #[should_panic]
    fn wrong_frame_length_is_rejected() {
        let config = Lc3Config::new(SamplingFrequency::Hz16000, FrameDuration::TenMs);
        let mut scaler_buf = vec![0.0; LongTermPostFilter::calc_working_buffer_length(&config)];
        let (mut ltpf, _) = LongTermPostFilter::new(config, &mut scaler_buf);
        ltpf.analyse(&[0.0; 100]);
    }
}
