/// The five sample rate classes of the codec. Anything else is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingFrequency {
    Hz8000,
    Hz16000,
    Hz24000,
    Hz32000,
    Hz48000,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDuration {
    SevenPointFiveMs,
    TenMs,
}

#[derive(Debug, Clone, Copy)]
pub struct Lc3Config {
    /// Sampling frequency class
    pub sampling_frequency: SamplingFrequency,

    /// Sampling frequency index (e.g. 4)
    pub fs_ind: usize,

    /// Sampling frequency in hz (e.g. 48000)
    pub fs: usize,

    /// Frame duration in milliseconds (e.g. TenMs)
    pub n_ms: FrameDuration,

    /// Number of samples processed in one frame of one channel (also known as frame size) (e.g. 480)
    pub nf: usize,
}

impl Lc3Config {
    pub const fn new(sampling_frequency: SamplingFrequency, frame_duration: FrameDuration) -> Self {
        let (fs_ind, fs) = match sampling_frequency {
            SamplingFrequency::Hz8000 => (0, 8000),
            SamplingFrequency::Hz16000 => (1, 16000),
            SamplingFrequency::Hz24000 => (2, 24000),
            SamplingFrequency::Hz32000 => (3, 32000),
            SamplingFrequency::Hz48000 => (4, 48000),
        };

        let nf = match frame_duration {
            FrameDuration::SevenPointFiveMs => fs * 3 / 400,
            FrameDuration::TenMs => fs / 100,
        };

        Self {
            sampling_frequency,
            fs_ind,
            fs,
            n_ms: frame_duration,
            nf,
        }
    }

    /// Sampling frequency in khz (e.g. 48)
    pub const fn fs_khz(&self) -> usize {
        self.fs / 1000
    }

    /// Frame duration in microseconds (7500 or 10000)
    pub const fn frame_duration_us(&self) -> usize {
        match self.n_ms {
            FrameDuration::SevenPointFiveMs => 7500,
            FrameDuration::TenMs => 10000,
        }
    }

    /// Number of samples per frame at 12.8 khz
    pub const fn len12p8(&self) -> usize {
        match self.n_ms {
            FrameDuration::SevenPointFiveMs => 96,
            FrameDuration::TenMs => 128,
        }
    }

    /// Number of samples per frame at 6.4 khz
    pub const fn len6p4(&self) -> usize {
        self.len12p8() / 2
    }

    /// Delay of the 12.8 khz analysis window relative to the newest resampled sample
    pub const fn delay_ltpf(&self) -> usize {
        match self.n_ms {
            FrameDuration::SevenPointFiveMs => 44,
            FrameDuration::TenMs => 24,
        }
    }

    /// Number of taps of the synthesis filter (4, 4, 6, 8 or 12)
    pub const fn ltpf_filter_width(&self) -> usize {
        let width = self.fs_khz() / 4;
        if width < 4 {
            4
        } else {
            width
        }
    }

    /// Number of samples at the start of a frame over which the synthesis filter crossfades
    pub const fn ltpf_transition_len(&self) -> usize {
        match self.n_ms {
            FrameDuration::SevenPointFiveMs => self.nf / 3,
            FrameDuration::TenMs => self.nf / 4,
        }
    }
}
