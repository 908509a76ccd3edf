use crate::common::{
    constants::{K_MAX, K_MIN, NUM_LAGS_6P4},
    scaler::{dot, energy, Scaler},
};
#[allow(unused_imports)]
use num_traits::real::Real;

// the weight of the autocorrelation drops linearly from 1.0 at K_MIN to 0.5 at K_MAX
const WEIGHT_INCREMENT: Scaler = -0.5 / (NUM_LAGS_6P4 - 1) as Scaler;

// half width of the window searched around the previous lag
const LOCAL_SEARCH_RADIUS: usize = 4;

/// A lag candidate relative to K_MIN with its normalized correlation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub lag: usize,
    pub nc: Scaler,
}

/// Coarse open loop pitch search at 6.4khz
pub struct PitchDetection {
    // lag chosen in the previous frame relative to K_MIN (0 to 97)
    t_prev: usize,
}

impl Default for PitchDetection {
    fn default() -> Self {
        Self::new()
    }
}

impl PitchDetection {
    pub fn new() -> Self {
        Self { t_prev: 0 }
    }

    /// Relative lag (0 to 97) retained for the local search of the next frame
    pub fn previous_lag(&self) -> usize {
        self.t_prev
    }

    /// Estimates the pitch lag of the current 6.4khz window
    ///
    /// # Arguments
    ///
    /// * `x_6p4` - K_MAX samples of history followed by the current window
    ///
    /// Returns the absolute lag at 6.4khz (17 to 114) and whether a pitch is present
    pub fn run(&mut self, x_6p4: &[Scaler]) -> (usize, bool) {
        assert!(x_6p4.len() > K_MAX);
        let len = x_6p4.len() - K_MAX;
        let current = &x_6p4[K_MAX..];
        let lagged = |k: usize| &x_6p4[K_MAX - K_MIN - k..][..len];

        let mut r = [0.0; NUM_LAGS_6P4];
        let mut r_w = [0.0; NUM_LAGS_6P4];
        for (k, (r, r_w)) in r.iter_mut().zip(r_w.iter_mut()).enumerate() {
            *r = dot(current, lagged(k));
            *r_w = *r * (1.0 + k as Scaler * WEIGHT_INCREMENT);
        }

        // first estimate favours short lags, second one favours continuity
        let lag_global = index_of_max_value(&r_w);
        let k_from = self.t_prev.saturating_sub(LOCAL_SEARCH_RADIUS);
        let k_to = (self.t_prev + LOCAL_SEARCH_RADIUS).min(NUM_LAGS_6P4 - 1);
        let lag_local = index_of_max_value(&r[k_from..=k_to]) + k_from;

        let energy_current = energy(current);
        let normalized = |k: usize| -> Candidate {
            let nc = normalized_correlation(r[k], energy_current, energy(lagged(k)));
            Candidate { lag: k, nc }
        };

        let global = normalized(lag_global);
        let local = if lag_local == lag_global { global } else { normalized(lag_local) };

        let selected = select_candidate(global, local);
        let present = is_pitch_present(selected.nc);
        self.t_prev = selected.lag;

        log::trace!(
            "pitch detection: global {:?} local {:?} present {}",
            global,
            local,
            present
        );

        (selected.lag + K_MIN, present)
    }
}

/// The continuity candidate wins unless its correlation is at most 85% of the global one
pub fn select_candidate(global: Candidate, local: Candidate) -> Candidate {
    if local.nc <= 0.85 * global.nc {
        global
    } else {
        local
    }
}

pub fn is_pitch_present(nc: Scaler) -> bool {
    nc > 0.6
}

// first index of the maximum value
fn index_of_max_value(slice: &[Scaler]) -> usize {
    let mut index = 0;
    let mut max = slice[0];

    for (n, value) in slice.iter().enumerate().skip(1) {
        if *value > max {
            index = n;
            max = *value;
        }
    }

    index
}

fn normalized_correlation(r: Scaler, energy_a: Scaler, energy_b: Scaler) -> Scaler {
    if r <= 0.0 {
        return 0.0;
    }

    let norm = (energy_a * energy_b).sqrt();
    if norm > 0.0 {
        r / norm
    } else {
        0.0
    }
}
