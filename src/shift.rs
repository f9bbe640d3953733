use alloc::vec;
use alloc::vec::Vec;

use crate::{Error, Sample};

/// Per-channel circular array addressed through a relocatable origin.
///
/// `get`/`set` resolve `(index + offset[channel]) % samples`, and
/// [`ShiftBuffer::shift()`] moves the origin in O(1) without touching the
/// data. Shifting by -1 and writing index 0 implements "push newest, age
/// out oldest", which is what makes this the delay-line primitive behind
/// [`Fir`](crate::Fir) and [`Iir`](crate::Iir): no per-sample data movement.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftBuffer<T> {
    data: Vec<T>,
    channels: usize,
    samples: usize,
    offsets: Vec<usize>,
}

impl<T: Sample> ShiftBuffer<T> {
    /// Create a zero-filled buffer of `samples` slots per channel.
    pub fn new(channels: usize, samples: usize) -> Result<Self, Error> {
        if channels == 0 || samples == 0 {
            return Err(Error::InvalidShape);
        }
        Ok(Self {
            data: vec![T::ZERO; channels * samples],
            channels,
            samples,
            offsets: vec![0; channels],
        })
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Slots per channel
    pub fn samples(&self) -> usize {
        self.samples
    }

    fn position(&self, channel: usize, index: usize) -> usize {
        assert!(channel < self.channels);
        channel * self.samples + (index + self.offsets[channel]) % self.samples
    }

    /// Value at `index` relative to the channel's origin
    pub fn get(&self, channel: usize, index: usize) -> T {
        self.data[self.position(channel, index)]
    }

    /// Overwrite the value at `index` relative to the channel's origin
    pub fn set(&mut self, channel: usize, index: usize, value: T) {
        let position = self.position(channel, index);
        self.data[position] = value;
    }

    /// Move the channel's origin by `amount` slots.
    ///
    /// Negative amounts of any magnitude wrap to a non-negative offset.
    pub fn shift(&mut self, channel: usize, amount: isize) {
        let samples = self.samples as isize;
        let offset = self.offsets[channel] as isize + amount % samples;
        self.offsets[channel] = offset.rem_euclid(samples) as usize;
    }

    /// Zero all contents without moving any origin.
    pub fn clear(&mut self) {
        self.fill(T::ZERO);
    }

    /// Overwrite all contents without moving any origin.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn shape_checked() {
        assert_eq!(ShiftBuffer::<i64>::new(0, 1), Err(Error::InvalidShape));
        assert_eq!(ShiftBuffer::<i64>::new(1, 0), Err(Error::InvalidShape));
    }

    #[test]
    fn origin_relocation() {
        let mut buffer = ShiftBuffer::new(1, 3).unwrap();
        for i in 0..3 {
            buffer.set(0, i, i as i32);
        }
        buffer.shift(0, 1);
        assert_eq!([buffer.get(0, 0), buffer.get(0, 1), buffer.get(0, 2)], [1, 2, 0]);
        buffer.shift(0, -2);
        assert_eq!(buffer.get(0, 0), 2);
    }

    #[test]
    fn channels_independent() {
        let mut buffer = ShiftBuffer::new(2, 4).unwrap();
        buffer.set(0, 0, 1i16);
        buffer.set(1, 0, 2);
        buffer.shift(0, -1);
        assert_eq!(buffer.get(0, 1), 1);
        assert_eq!(buffer.get(1, 0), 2);
    }

    #[test]
    fn clear_keeps_origin() {
        let mut buffer = ShiftBuffer::new(1, 4).unwrap();
        buffer.shift(0, 2);
        buffer.set(0, 0, 7i8);
        buffer.clear();
        assert_eq!(buffer.get(0, 0), 0);
        buffer.set(0, 2, 5);
        // Origin still at slot 2: index 2 resolves to slot 0.
        buffer.shift(0, -2);
        assert_eq!(buffer.get(0, 4), 5);
    }

    #[quickcheck]
    fn shift_round_trip(amount: isize, offset: u8) -> bool {
        let mut buffer = ShiftBuffer::new(1, 8).unwrap();
        for i in 0..8 {
            buffer.set(0, i, i as i32);
        }
        buffer.shift(0, offset as isize);
        let before: Vec<_> = (0..8).map(|i| buffer.get(0, i)).collect();
        buffer.shift(0, amount);
        buffer.shift(0, amount.wrapping_neg());
        let after: Vec<_> = (0..8).map(|i| buffer.get(0, i)).collect();
        before == after
    }
}
