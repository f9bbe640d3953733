use alloc::vec::Vec;

use crate::{Error, Sample, ShiftBuffer};

/// Fixed delay line over a [`ShiftBuffer`].
///
/// Each call to [`DelayBuffer::delay()`] returns the sample that entered
/// exactly `delay` calls earlier on that channel; the first `delay` calls
/// return zero. Advancing is a single origin relocation, so the per-sample
/// cost is O(1) regardless of the configured delay.
///
/// ```
/// use adsp::DelayBuffer;
///
/// let mut line = DelayBuffer::new(1, 3).unwrap();
/// assert_eq!(line.delay(0, 7i32), 0);
/// assert_eq!(line.delay(0, 8), 0);
/// assert_eq!(line.delay(0, 9), 0);
/// assert_eq!(line.delay(0, 10), 7);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DelayBuffer<T> {
    buffer: ShiftBuffer<T>,
}

impl<T: Sample> DelayBuffer<T> {
    /// Create a zero-filled delay line of `delay` samples per channel.
    pub fn new(channels: usize, delay: usize) -> Result<Self, Error> {
        Ok(Self {
            buffer: ShiftBuffer::new(channels, delay)?,
        })
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        self.buffer.channels()
    }

    /// Configured delay in samples
    pub fn samples(&self) -> usize {
        self.buffer.samples()
    }

    /// Ingest one sample and return the one `delay` steps old.
    ///
    /// The oldest sample sits at the channel origin: read it, replace it
    /// with the new sample, and advance the origin past it.
    pub fn delay(&mut self, channel: usize, sample: T) -> T {
        let oldest = self.buffer.get(channel, 0);
        self.buffer.set(channel, 0, sample);
        self.buffer.shift(channel, 1);
        oldest
    }

    /// Ingest a block of samples on one channel.
    ///
    /// Fails with [`Error::InvalidArgument`] if the block is longer than the
    /// configured delay: that bound guarantees no sample fed in by this call
    /// is also read back out by it.
    pub fn delay_block(&mut self, channel: usize, samples: &[T]) -> Result<Vec<T>, Error> {
        if samples.len() > self.samples() {
            return Err(Error::InvalidArgument);
        }
        Ok(samples.iter().map(|&x| self.delay(channel, x)).collect())
    }

    /// Zero the line contents.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Overwrite the line contents.
    pub fn fill(&mut self, value: T) {
        self.buffer.fill(value);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_delay() {
        let delay = 5;
        let mut line = DelayBuffer::new(1, delay).unwrap();
        for i in 0..delay {
            assert_eq!(line.delay(0, (i + 1) as i32), 0);
        }
        for i in 0..delay {
            assert_eq!(line.delay(0, 0), (i + 1) as i32);
        }
    }

    #[test]
    fn channels_independent() {
        let mut line = DelayBuffer::new(2, 2).unwrap();
        line.delay(0, 1.0f32);
        line.delay(1, 2.0);
        line.delay(0, 3.0);
        assert_eq!(line.delay(0, 0.0), 1.0);
        assert_eq!(line.delay(1, 0.0), 0.0);
        assert_eq!(line.delay(1, 0.0), 2.0);
    }

    #[test]
    fn block_bounded() {
        let mut line = DelayBuffer::new(1, 4).unwrap();
        assert_eq!(
            line.delay_block(0, &[1i16, 2, 3, 4, 5]),
            Err(Error::InvalidArgument)
        );
        assert_eq!(line.delay_block(0, &[1, 2, 3, 4]).unwrap(), vec![0, 0, 0, 0]);
        assert_eq!(line.delay_block(0, &[5, 6]).unwrap(), vec![1, 2]);
    }

    #[test]
    fn clear_forgets_history() {
        let mut line = DelayBuffer::new(1, 2).unwrap();
        line.delay(0, 1i64);
        line.delay(0, 2);
        line.clear();
        assert_eq!(line.delay(0, 3), 0);
        assert_eq!(line.delay(0, 4), 0);
        assert_eq!(line.delay(0, 5), 3);
    }
}
