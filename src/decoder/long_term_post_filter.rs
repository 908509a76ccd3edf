use crate::{
    common::{
        config::Lc3Config,
        constants::{MAX_FILTER_WIDTH, PITCH_MAX_12P8},
        ltpf_data::LtpfData,
        pitch_index::PitchLag,
        ring_buffer::RingBuffer,
        scaler::Scaler,
    },
    tables::long_term_post_filter_coef::{TAB_LTPF_DEN, TAB_LTPF_NUM},
};

// number of gain levels of the filter, higher bit rates leave the filter off
const NUM_GAIN_LEVELS: usize = 4;

/// Feedforward and feedback taps of the comb filter (only the first `width` are used)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct FilterCoefs {
    num: [Scaler; MAX_FILTER_WIDTH],
    den: [Scaler; MAX_FILTER_WIDTH],
}

impl FilterCoefs {
    fn new(fs_ind: usize, width: usize, phase: usize, gain_ind: usize) -> Self {
        let gain = 0.4 - 0.05 * gain_ind as Scaler;
        let den_taps = &TAB_LTPF_DEN[fs_ind][phase];
        let num_taps = &TAB_LTPF_NUM[fs_ind][gain_ind];

        // taps are applied in reverse order
        let mut coefs = Self::default();
        for i in 0..width {
            coefs.den[i] = gain * den_taps[width - 1 - i];
            coefs.num[i] = 0.85 * gain * num_taps[width - 1 - i];
        }

        coefs
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Fade {
    In,
    Out,
    None,
}

/// Decoder side of the long term post filter for one channel
pub struct LongTermPostFilter<'a> {
    // constant
    config: Lc3Config,
    width: usize,
    transition_len: usize,

    // state
    x_hat_history: RingBuffer<'a>,
    tail: [Scaler; MAX_FILTER_WIDTH - 1],
    coefs_prev: FilterCoefs,
    active_prev: bool,
    pitch_prev: usize,
}

impl<'a> LongTermPostFilter<'a> {
    pub fn new(config: Lc3Config, scaler_buf: &'a mut [Scaler]) -> (Self, &'a mut [Scaler]) {
        let (history, scaler_buf) = scaler_buf.split_at_mut(Self::calc_working_buffer_length(&config));

        (
            Self {
                config,
                width: config.ltpf_filter_width(),
                transition_len: config.ltpf_transition_len(),
                x_hat_history: RingBuffer::new(history),
                tail: [0.0; MAX_FILTER_WIDTH - 1],
                coefs_prev: FilterCoefs::default(),
                active_prev: false,
                pitch_prev: 0,
            },
            scaler_buf,
        )
    }

    /// Length of the decoded output history: the longest lag plus half the filter width for the
    /// feedback plus one filter width for the cascaded crossfade
    pub const fn calc_working_buffer_length(config: &Lc3Config) -> usize {
        let max_pitch = PitchLag::new(PITCH_MAX_12P8, 0).quarter_samples_at(config);
        let width = config.ltpf_filter_width();
        max_pitch / 4 + width / 2 + width
    }

    /// Filters one decoded frame in place
    ///
    /// # Arguments
    ///
    /// * `data` - Post filter parameters of the frame (None if not available, e.g. a lost frame)
    /// * `nbytes` - Size of the encoded frame in bytes
    /// * `x_hat` - Decoded output samples of the frame (nf samples)
    pub fn run(&mut self, data: Option<&LtpfData>, nbytes: usize, x_hat: &mut [Scaler]) {
        assert_eq!(x_hat.len(), self.config.nf);
        let width = self.width;
        let nt = self.transition_len;

        // gain level derived from the bit rate normalised to 10ms frames
        let fd_us = self.config.frame_duration_us();
        let nbits = (nbytes * 8 * 10000 + fd_us / 2) / fd_us;
        let min_level = 3 + self.config.fs_ind;
        let gain_ind = (nbits / 80).max(min_level) - min_level;

        let active = matches!(data, Some(data) if data.active) && gain_ind < NUM_GAIN_LEVELS;
        let pitch = data.map_or(0, |data| data.pitch_lag().quarter_samples_at(&self.config));
        let coefs = if active {
            FilterCoefs::new(self.config.fs_ind, width, pitch & 3, gain_ind)
        } else {
            FilterCoefs::default()
        };

        // the steady part of the frame starts from the unfiltered samples before it
        let mut x0 = [0.0; MAX_FILTER_WIDTH - 1];
        x0[..width - 1].copy_from_slice(&x_hat[nt - (width - 1)..nt]);

        let history = &self.x_hat_history;
        let tail = &self.tail[..width - 1];
        match (self.active_prev, active) {
            (false, true) => {
                log::trace!("ltpf fade in at pitch {}", pitch);
                filter_segment(history, x_hat, tail, 0, nt, pitch / 4, &coefs, width, Fade::In);
            }
            (true, false) => {
                log::trace!("ltpf fade out at pitch {}", self.pitch_prev);
                let (lag, coefs_prev) = (self.pitch_prev / 4, &self.coefs_prev);
                filter_segment(history, x_hat, tail, 0, nt, lag, coefs_prev, width, Fade::Out);
            }
            (true, true) if self.pitch_prev == pitch => {
                filter_segment(history, x_hat, tail, 0, nt, pitch / 4, &coefs, width, Fade::None);
            }
            (true, true) => {
                log::trace!("ltpf pitch change from {} to {}", self.pitch_prev, pitch);
                let (lag, coefs_prev) = (self.pitch_prev / 4, &self.coefs_prev);
                filter_segment(history, x_hat, tail, 0, nt, lag, coefs_prev, width, Fade::Out);

                // the second stage continues from the filtered output of the previous frame
                let mut latest = [0.0; MAX_FILTER_WIDTH - 1];
                history.copy_latest(&mut latest[..width - 1]);
                filter_segment(history, x_hat, &latest[..width - 1], 0, nt, pitch / 4, &coefs, width, Fade::In);
            }
            (false, false) => {}
        }

        // the input side of the filter memory for the next frame (not yet filtered)
        let nf = self.config.nf;
        self.tail[..width - 1].copy_from_slice(&x_hat[nf - (width - 1)..]);

        if active {
            let lag = pitch / 4;
            filter_segment(history, x_hat, &x0[..width - 1], nt, nf - nt, lag, &coefs, width, Fade::None);
        }

        self.active_prev = active;
        self.pitch_prev = pitch;
        self.coefs_prev = coefs;
        self.x_hat_history.push_slice(x_hat);
    }
}

// Applies the comb filter to x[start..start + len] in place.
//
// `x0` holds the width - 1 unfiltered samples that precede the segment. Feedback samples older
// than the frame are read from the output history. The gain of the filter ramps linearly over
// the segment when fading.
#[allow(clippy::too_many_arguments)]
fn filter_segment(
    history: &RingBuffer,
    x: &mut [Scaler],
    x0: &[Scaler],
    start: usize,
    len: usize,
    lag: usize,
    coefs: &FilterCoefs,
    width: usize,
    fade: Fade,
) {
    debug_assert_eq!(x0.len(), width - 1);
    let lt = lag + width / 2;

    let (mut g, step) = match fade {
        Fade::In => (0.0, 1.0 / len as Scaler),
        Fade::Out => (1.0, -1.0 / len as Scaler),
        Fade::None => (1.0, 0.0),
    };

    let mut window = [0.0; MAX_FILTER_WIDTH];
    window[..width - 1].copy_from_slice(x0);

    for n in start..start + len {
        window[width - 1] = x[n];

        let mut u = 0.0;
        for k in 0..width {
            let y = if n + k < lt { history.back(lt - n - k) } else { x[n + k - lt] };
            u += coefs.num[k] * window[k] - coefs.den[k] * y;
        }

        x[n] = window[width - 1] - g * u;
        g += step;
        window.copy_within(1..width, 0);
    }
}
