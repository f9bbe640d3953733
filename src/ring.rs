use alloc::vec;
use alloc::vec::Vec;

use crate::{Error, Sample};

/// Per-channel circular FIFO with independent read and write cursors.
///
/// `push` writes at the write cursor and advances it modulo the size;
/// `pop` reads at the read cursor and advances it modulo the size. There is
/// deliberately no occupancy tracking between the two cursors: this is a
/// low-level primitive, not a blocking queue, and the caller is responsible
/// for pacing pops against pushes.
#[derive(Clone, Debug, PartialEq)]
pub struct RingBuffer<T> {
    data: Vec<T>,
    channels: usize,
    samples: usize,
    read: Vec<usize>,
    write: Vec<usize>,
}

impl<T: Sample> RingBuffer<T> {
    /// Create a zero-filled ring buffer of `samples` slots per channel.
    pub fn new(channels: usize, samples: usize) -> Result<Self, Error> {
        if channels == 0 || samples == 0 {
            return Err(Error::InvalidShape);
        }
        Ok(Self {
            data: vec![T::ZERO; channels * samples],
            channels,
            samples,
            read: vec![0; channels],
            write: vec![0; channels],
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

    /// Read one value at the read cursor and advance it.
    pub fn pop(&mut self, channel: usize) -> T {
        let index = self.read[channel];
        self.read[channel] = (index + 1) % self.samples;
        self.data[channel * self.samples + index]
    }

    /// Read `amount` values in FIFO order.
    pub fn pop_n(&mut self, channel: usize, amount: usize) -> Vec<T> {
        (0..amount).map(|_| self.pop(channel)).collect()
    }

    /// Write one value at the write cursor and advance it.
    pub fn push(&mut self, channel: usize, value: T) {
        let index = self.write[channel];
        self.write[channel] = (index + 1) % self.samples;
        self.data[channel * self.samples + index] = value;
    }

    /// Write all values in order.
    pub fn push_slice(&mut self, channel: usize, values: &[T]) {
        for &value in values {
            self.push(channel, value);
        }
    }

    /// Overwrite every slot without moving either cursor.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}
