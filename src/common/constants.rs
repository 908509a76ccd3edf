// max number of taps of the synthesis filter (48khz)
pub const MAX_FILTER_WIDTH: usize = 12;

// pitch lag search range at 6.4khz
pub const K_MIN: usize = 17;
pub const K_MAX: usize = 114;
pub const NUM_LAGS_6P4: usize = K_MAX + 1 - K_MIN;

// pitch lag search range at 12.8khz
pub const PITCH_MIN_12P8: usize = 32;
pub const PITCH_MAX_12P8: usize = 228;

// look back needed behind the 12.8khz analysis window (longest lag plus interpolation guard)
pub const NMEM_12P8D: usize = PITCH_MAX_12P8 + 4;

// largest value that fits in the 9 bit pitch index
pub const MAX_PITCH_INDEX: usize = 511;
