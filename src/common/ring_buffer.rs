use crate::common::scaler::Scaler;

/// Circular buffer of the most recent samples of a signal.
///
/// Writes advance `head` and wrap at the end of the borrowed storage. Reads are expressed as a
/// distance back from the newest sample so callers never deal with the wrap point. Samples older
/// than anything written yet read as silence.
pub struct RingBuffer<'a> {
    buf: &'a mut [Scaler],
    head: usize, // index of the next write
    len: usize,  // number of valid samples (saturates at capacity)
}

impl<'a> RingBuffer<'a> {
    pub fn new(buf: &'a mut [Scaler]) -> Self {
        assert!(!buf.is_empty(), "ring buffer needs a non zero capacity");
        buf.fill(0.0);
        Self { buf, head: 0, len: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, sample: Scaler) {
        self.buf[self.head] = sample;
        self.head = if self.head + 1 == self.buf.len() { 0 } else { self.head + 1 };
        self.len = (self.len + 1).min(self.buf.len());
    }

    /// Appends samples in order. Only the last `capacity` samples of a longer slice survive.
    pub fn push_slice(&mut self, samples: &[Scaler]) {
        let capacity = self.buf.len();
        let samples = &samples[samples.len().saturating_sub(capacity)..];

        // at most two contiguous copies: up to the end of the storage then from the front
        let first = samples.len().min(capacity - self.head);
        self.buf[self.head..self.head + first].copy_from_slice(&samples[..first]);
        self.buf[..samples.len() - first].copy_from_slice(&samples[first..]);

        self.head = (self.head + samples.len()) % capacity;
        self.len = (self.len + samples.len()).min(capacity);
    }

    /// The sample `distance` positions back from the newest one (1 is the newest)
    pub fn back(&self, distance: usize) -> Scaler {
        let capacity = self.buf.len();
        assert!(
            distance >= 1 && distance <= capacity,
            "distance {} outside ring of {}",
            distance,
            capacity
        );

        if distance > self.len {
            return 0.0;
        }

        let index = if distance <= self.head {
            self.head - distance
        } else {
            self.head + capacity - distance
        };

        self.buf[index]
    }

    /// Copies the `out.len()` most recent samples into `out`, oldest first
    pub fn copy_latest(&self, out: &mut [Scaler]) {
        let n = out.len();
        for (i, to) in out.iter_mut().enumerate() {
            *to = self.back(n - i);
        }
    }
}

/// Fixed length look back window that slides forward one frame at a time.
///
/// The oldest samples are shifted out at the front and the newest frame is written at the back,
/// so the whole window stays contiguous for correlation.
pub struct HistoryBuffer<'a> {
    buf: &'a mut [Scaler],
}

impl<'a> HistoryBuffer<'a> {
    pub fn new(buf: &'a mut [Scaler]) -> Self {
        buf.fill(0.0);
        Self { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Shifts out the `n` oldest samples and returns the `n` slots at the back for new samples
    pub fn shift_in(&mut self, n: usize) -> &mut [Scaler] {
        let len = self.buf.len();
        assert!(n <= len);
        self.buf.copy_within(n.., 0);
        &mut self.buf[len - n..]
    }

    pub fn push(&mut self, frame: &[Scaler]) {
        self.shift_in(frame.len()).copy_from_slice(frame);
    }

    pub fn as_slice(&self) -> &[Scaler] {
        self.buf
    }
}
