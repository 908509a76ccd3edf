use crate::common::{config::FrameDuration, scaler::Scaler};

/// Decides whether the post filter is audible in the current frame.
///
/// Switching on needs several consecutive highly correlated frames while staying on is more
/// tolerant, so that the decoder does not fade the filter in and out on every other frame.
#[derive(Debug)]
pub struct ActivationGate {
    n_ms: FrameDuration,
    active: bool,

    // pitch of the previous frame in quarter samples at 12.8khz (0 when not present)
    pitch: usize,

    // normalized correlation of the previous frame and the one before it
    nc: [Scaler; 2],
}

impl ActivationGate {
    pub fn new(n_ms: FrameDuration) -> Self {
        Self {
            n_ms,
            active: false,
            pitch: 0,
            nc: [0.0; 2],
        }
    }

    /// # Arguments
    ///
    /// * `pitch_present` - outcome of the pitch detection in this frame
    /// * `pitch` - refined pitch in quarter samples at 12.8khz (0 when not present)
    /// * `nc` - normalized correlation at the refined pitch (0 when not present)
    pub fn decide(&mut self, pitch_present: bool, pitch: usize, nc: Scaler) -> bool {
        let active = if self.active {
            pitch_present
                && (nc > 0.9 || (nc > 0.84 && pitch.abs_diff(self.pitch) < 8 && nc - self.nc[0] > -0.1))
        } else {
            pitch_present
                && (self.n_ms == FrameDuration::TenMs || self.nc[1] > 0.94)
                && self.nc[0] > 0.94
                && nc > 0.94
        };

        if active != self.active {
            log::debug!("ltpf {} at pitch {} (nc {})", if active { "on" } else { "off" }, pitch, nc);
        }

        self.nc[1] = self.nc[0];
        self.nc[0] = nc;
        self.pitch = pitch;
        self.active = active;

        active
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use std::vec::Vec;

    // feeds (pitch, nc) frames into a fresh gate, a pitch of zero meaning no pitch present
    fn run(n_ms: FrameDuration, frames: &[(usize, Scaler)]) -> Vec<bool> {
        let mut gate = ActivationGate::new(n_ms);
        frames
            .iter()
            .map(|(pitch, nc)| gate.decide(*pitch != 0, *pitch, *nc))
            .collect()
    }

    const TEN: FrameDuration = FrameDuration::TenMs;
    const SEVEN: FrameDuration = FrameDuration::SevenPointFiveMs;

    #[test]
    fn activation_needs_two_frames_above_094_at_10ms() {
        assert_eq!(run(TEN, &[(200, 0.95), (200, 0.95)]), [false, true]);
        assert_eq!(run(TEN, &[(200, 0.94), (200, 0.95)]), [false, false]);
        assert_eq!(run(TEN, &[(200, 0.95), (200, 0.94)]), [false, false]);
        assert_eq!(run(TEN, &[(200, 0.9401), (200, 0.9401)]), [false, true]);
    }

    #[test]
    fn activation_needs_three_frames_above_094_at_7_5ms() {
        assert_eq!(
            run(SEVEN, &[(200, 0.95), (200, 0.95), (200, 0.95)]),
            [false, false, true]
        );
        assert_eq!(
            run(SEVEN, &[(200, 0.94), (200, 0.95), (200, 0.95)]),
            [false, false, false]
        );
    }

    #[test]
    fn activation_needs_a_pitch() {
        let mut gate = ActivationGate::new(TEN);
        gate.decide(true, 200, 0.99);

        assert!(!gate.decide(false, 200, 0.99));
    }

    #[test]
    fn stays_active_above_09() {
        let prime = [(200, 0.95), (200, 0.95)];

        // large pitch change and correlation drop are tolerated above 0.9
        let frames = [prime[0], prime[1], (300, 0.9001)];
        assert_eq!(run(TEN, &frames), [false, true, true]);

        let frames = [prime[0], prime[1], (300, 0.9)];
        assert_eq!(run(TEN, &frames), [false, true, false]);
    }

    #[test]
    fn stays_active_above_084_with_stable_pitch() {
        let prime = [(200, 0.95), (200, 0.95)];

        let frames = [prime[0], prime[1], (207, 0.88), (200, 0.8401)];
        assert_eq!(run(TEN, &frames), [false, true, true, true]);

        let frames = [prime[0], prime[1], (200, 0.84)];
        assert_eq!(run(TEN, &frames), [false, true, false]);
    }

    #[test]
    fn pitch_difference_must_be_below_8() {
        let frames = [(200, 0.95), (200, 0.95), (208, 0.88)];
        assert_eq!(run(TEN, &frames), [false, true, false]);

        let frames = [(200, 0.95), (200, 0.95), (192, 0.88)];
        assert_eq!(run(TEN, &frames), [false, true, false]);

        let frames = [(200, 0.95), (200, 0.95), (193, 0.88)];
        assert_eq!(run(TEN, &frames), [false, true, true]);
    }

    #[test]
    fn correlation_drop_must_stay_above_minus_01() {
        // a drop of 0.11 switches off, a drop of 0.09 does not
        let frames = [(200, 0.95), (200, 0.99), (200, 0.88)];
        assert_eq!(run(TEN, &frames), [false, true, false]);

        let frames = [(200, 0.95), (200, 0.97), (200, 0.88)];
        assert_eq!(run(TEN, &frames), [false, true, true]);
    }

    #[test]
    fn a_missing_pitch_switches_off() {
        let frames = [(200, 0.95), (200, 0.95), (0, 0.0)];
        assert_eq!(run(TEN, &frames), [false, true, false]);
    }
}
