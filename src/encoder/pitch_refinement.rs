use crate::{
    common::{
        constants::{PITCH_MAX_12P8, PITCH_MIN_12P8},
        pitch_index::PitchLag,
        scaler::{dot, Scaler},
    },
    tables::long_term_post_filter_coef::{TAB_LTPF_INTERP_R, TAB_LTPF_INTERP_X12K8},
};
#[allow(unused_imports)]
use num_traits::real::Real;

// lags within this many samples of twice the coarse lag are searched
const SEARCH_RADIUS: usize = 4;

// extra lags correlated on either side of the search range for the interpolator
const INTERP_GUARD: usize = 4;

const MAX_NUM_LAGS: usize = 2 * SEARCH_RADIUS + 1 + 2 * INTERP_GUARD;

/// Refines the coarse 6.4khz lag to quarter sample precision at 12.8khz
///
/// # Arguments
///
/// * `x` - 12.8khz history with at least 232 samples before the analysis window
/// * `pos` - start of the analysis window in `x`
/// * `len` - length of the analysis window (96 or 128)
/// * `t_coarse` - absolute lag found at 6.4khz (17 to 114)
pub fn refine_pitch(x: &[Scaler], pos: usize, len: usize, t_coarse: usize) -> PitchLag {
    let r_min = PITCH_MIN_12P8.max(2 * t_coarse - SEARCH_RADIUS);
    let r_max = PITCH_MAX_12P8.min(2 * t_coarse + SEARCH_RADIUS);
    let num_lags = r_max - r_min + 1;
    let first_lag = r_min - INTERP_GUARD;

    let current = &x[pos..pos + len];
    let mut r_buf = [0.0; MAX_NUM_LAGS];
    let r = &mut r_buf[..num_lags + 2 * INTERP_GUARD];
    for (i, r) in r.iter_mut().enumerate() {
        let from = pos - (first_lag + i);
        *r = dot(current, &x[from..from + len]);
    }

    // integer lag (first maximum within the search range)
    let mut e = 0;
    let mut r_max_value = r[INTERP_GUARD];
    for (i, value) in r[INTERP_GUARD..INTERP_GUARD + num_lags].iter().enumerate().skip(1) {
        if *value > r_max_value {
            r_max_value = *value;
            e = i;
        }
    }
    let mut e = e + r_min;

    // fractional part, limited by the resolution of the index band
    let centre = e - first_lag;
    let window = &r[centre - INTERP_GUARD..=centre + INTERP_GUARD];
    let mut fr: i32 = 0;
    let mut max_value = interpolate_correlation(window, 0);
    for d in 1..=3 {
        if e >= 127 && (d & 1 == 1 || e >= 157) {
            continue;
        }

        let value = interpolate_correlation(window, d);
        if value > max_value {
            max_value = value;
            fr = d;
        }

        if e > PITCH_MIN_12P8 {
            let value = interpolate_correlation(window, -d);
            if value > max_value {
                max_value = value;
                fr = -d;
            }
        }
    }

    if fr < 0 {
        e -= 1;
        fr += 4;
    }

    PitchLag::new(e, fr as usize)
}

/// Correlation at a quarter sample offset `d` (-3 to 3) from the centre of a window of 9
/// correlation values
pub fn interpolate_correlation(window: &[Scaler], d: i32) -> Scaler {
    debug_assert_eq!(window.len(), 2 * INTERP_GUARD + 1);
    debug_assert!((-3..=3).contains(&d));

    let (taps, from) = if d < 0 {
        (&TAB_LTPF_INTERP_R[(4 + d) as usize], 0)
    } else {
        (&TAB_LTPF_INTERP_R[d as usize], 1)
    };

    window[from..].iter().zip(taps.iter()).map(|(r, h)| *r * *h).sum()
}

/// Normalized correlation between the analysis window and its copy delayed by `pitch`, both
/// interpolated with the 4 tap quarter sample filter
pub fn normalized_correlation(x: &[Scaler], pos: usize, len: usize, pitch: PitchLag) -> Scaler {
    let interpolated = |from: usize, taps: &[Scaler; 4]| -> Scaler {
        // taps run backwards from the sample after `from`
        taps.iter().enumerate().map(|(k, h)| x[from + 1 - k] * *h).sum()
    };

    let delayed = pos - pitch.int;
    let mut uv = 0.0;
    let mut uu = 0.0;
    let mut vv = 0.0;
    for n in 0..len {
        let u = interpolated(pos + n, &TAB_LTPF_INTERP_X12K8[0]);
        let v = interpolated(delayed + n, &TAB_LTPF_INTERP_X12K8[pitch.fr]);
        uv += u * v;
        uu += u * u;
        vv += v * v;
    }

    let norm = (uu * vv).sqrt();
    if norm > 0.0 {
        uv / norm
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::common::constants::NMEM_12P8D;
    use std::vec::Vec;

    const POS: usize = NMEM_12P8D;
    const LEN: usize = 128;

    // a harmonic rich periodic signal with a period of `period` samples
    fn harmonics(period: f64) -> Vec<Scaler> {
        (0..POS + LEN + 24)
            .map(|n| {
                (1..=12)
                    .map(|k| {
                        let k = k as f64;
                        8000.0 / k * (2.0 * core::f64::consts::PI * k * n as f64 / period + 0.7 * k).sin()
                    })
                    .sum::<f64>() as Scaler
            })
            .collect()
    }

    fn refine(period: f64) -> PitchLag {
        refine_pitch(&harmonics(period), POS, LEN, (period / 2.0) as usize)
    }

    #[test]
    fn integer_lags() {
        assert_eq!(refine(40.0), PitchLag::new(40, 0));
        assert_eq!(refine(64.0), PitchLag::new(64, 0));
    }

    #[test]
    fn fractional_lags() {
        assert_eq!(refine(64.25), PitchLag::new(64, 1));
        assert_eq!(refine(100.5), PitchLag::new(100, 2));
    }

    #[test]
    fn shortest_lag_only_looks_forward() {
        assert_eq!(refine(32.0), PitchLag::new(32, 0));
        assert_eq!(refine(32.25), PitchLag::new(32, 1));
    }

    #[test]
    fn periodic_signal_is_fully_correlated() {
        for period in [40.0, 64.25, 100.5] {
            let x = harmonics(period);
            let pitch = refine_pitch(&x, POS, LEN, (period / 2.0) as usize);
            let nc = normalized_correlation(&x, POS, LEN, pitch);

            assert!(nc > 0.99, "period {} nc {}", period, nc);
        }
    }

    #[test]
    fn silence_has_zero_correlation() {
        let x = [0.0; POS + LEN + 24];
        assert_eq!(normalized_correlation(&x, POS, LEN, PitchLag::new(80, 2)), 0.0);
    }

    #[test]
    fn interpolation_at_zero_offset_is_centre_weighted() {
        let mut window = [0.0; 9];
        window[4] = 1.0;

        assert_eq!(interpolate_correlation(&window, 0), TAB_LTPF_INTERP_R[0][3]);
        assert_eq!(interpolate_correlation(&window, -1), TAB_LTPF_INTERP_R[3][4]);
        assert_eq!(interpolate_correlation(&window, 2), TAB_LTPF_INTERP_R[2][3]);
    }
}
