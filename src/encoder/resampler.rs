use crate::{
    common::{
        config::{Lc3Config, SamplingFrequency},
        scaler::Scaler,
    },
    tables::long_term_post_filter_coef::{
        HP50_A1, HP50_A2, HP50_B1, HP50_B2, TAB_RESAMP_6P4, TAB_RESAMP_FILTER,
    },
};
use itertools::Itertools;

// index of the centre tap of TAB_RESAMP_FILTER
const RESAMP_FILTER_CENTRE: usize = 119;

// number of 12.8khz output samples produced per block of input
const BLOCK_OUTPUT_LEN: usize = 8;

/// Polyphase layout of the resampling filter for one sampling frequency.
///
/// The input is conceptually upsampled to 64khz (8, 16 and 32khz) or 192khz (24 and 48khz),
/// low pass filtered by TAB_RESAMP_FILTER (designed at 192khz) and decimated to 12.8khz.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ResampleKernel {
    // 3 in the 64khz domain (filter taps are 3 apart at 192khz), 1 in the 192khz domain
    stride_mul: usize,

    // upsampling factor from the input rate to the 64khz or 192khz domain
    p: usize,

    // gain compensating for the zeros inserted by upsampling (halved for 8khz)
    gain: Scaler,
}

impl ResampleKernel {
    const fn new(sampling_frequency: SamplingFrequency) -> Self {
        let (stride_mul, p, gain) = match sampling_frequency {
            SamplingFrequency::Hz8000 => (3, 8, 12.0),
            SamplingFrequency::Hz16000 => (3, 4, 12.0),
            SamplingFrequency::Hz24000 => (1, 8, 8.0),
            SamplingFrequency::Hz32000 => (3, 2, 6.0),
            SamplingFrequency::Hz48000 => (1, 4, 4.0),
        };

        Self { stride_mul, p, gain }
    }

    // length of one block in the upsampled domain (40 at 64khz, 120 at 192khz)
    const fn upsampled_block_len(&self) -> usize {
        120 / self.stride_mul
    }

    // input samples consumed per block of 8 output samples
    const fn block_len(&self) -> usize {
        self.upsampled_block_len() / self.p
    }

    // distance between consecutive taps of TAB_RESAMP_FILTER
    const fn stride(&self) -> usize {
        self.stride_mul * self.p
    }

    // input samples from the previous frame needed as filter memory (10, 20, 30, 40 or 60)
    const fn look_back(&self) -> usize {
        2 * self.block_len()
    }
}

/// Resamples the input frame to 12.8khz (with a 50hz high pass) and that again to 6.4khz
pub struct Resampler {
    kernel: ResampleKernel,
    b1: Scaler,
    b2: Scaler,

    // state of the 50hz high pass filter
    hp50_s1: Scaler,
    hp50_s2: Scaler,
}

impl Resampler {
    pub fn new(config: &Lc3Config) -> Self {
        let kernel = ResampleKernel::new(config.sampling_frequency);

        Self {
            kernel,
            b1: HP50_B1 * kernel.gain,
            b2: HP50_B2 * kernel.gain,
            hp50_s1: 0.0,
            hp50_s2: 0.0,
        }
    }

    /// Number of samples of the previous frame that must precede the current frame
    pub const fn look_back(config: &Lc3Config) -> usize {
        ResampleKernel::new(config.sampling_frequency).look_back()
    }

    /// Resamples to 12.8khz and removes the dc offset
    ///
    /// # Arguments
    ///
    /// * `x` - Look back samples followed by the current frame
    /// * `out` - Resampled and high pass filtered output (96 or 128 samples)
    pub fn resample_12p8(&mut self, x: &[Scaler], out: &mut [Scaler]) {
        let kernel = self.kernel;
        let w = kernel.block_len();
        let look_back = kernel.look_back();
        let stride = kernel.stride();
        assert_eq!(x.len(), look_back + out.len() / BLOCK_OUTPUT_LEN * w);

        for (block, out_block) in out.chunks_exact_mut(BLOCK_OUTPUT_LEN).enumerate() {
            let base = look_back + block * w;

            for (n, y) in out_block.iter_mut().enumerate() {
                // position of the output sample in the upsampled domain
                let j = n * kernel.upsampled_block_len() / BLOCK_OUTPUT_LEN;
                let phase = kernel.stride_mul * (j % kernel.p);

                // 2w input samples ending at base + j / p
                let from = base + j / kernel.p + 1 - 2 * w;
                let h_from = RESAMP_FILTER_CENTRE + stride - stride * w - phase;

                let un: Scaler = x[from..from + 2 * w]
                    .iter()
                    .zip(TAB_RESAMP_FILTER[h_from..].iter().step_by(stride))
                    .map(|(x, h)| *x * *h)
                    .sum();

                // 50hz high pass (transposed direct form ii, b0 equals b2)
                let yn = self.b2 * un + self.hp50_s1;
                self.hp50_s1 = self.b1 * un - HP50_A1 * yn + self.hp50_s2;
                self.hp50_s2 = self.b2 * un - HP50_A2 * yn;
                *y = yn;
            }
        }
    }

    /// Halves the sampling rate with a 5 tap symmetric low pass filter
    ///
    /// # Arguments
    ///
    /// * `x` - 12.8khz samples starting 3 samples before the segment to resample
    /// * `out` - 6.4khz output, each sample centred on every second input sample
    pub fn resample_6p4(x: &[Scaler], out: &mut [Scaler]) {
        assert!(x.len() >= 2 * out.len() + 3);
        let [h0, h1, h2] = TAB_RESAMP_6P4;

        for (y, (s0, s1, s2, s3, s4)) in out.iter_mut().zip(x.iter().tuple_windows().step_by(2)) {
            *y = *s2 * h0 + (*s1 + *s3) * h1 + (*s0 + *s4) * h2;
        }
    }
}
