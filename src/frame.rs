use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{Error, Sample};

/// Rectangular channel × sample-index buffer.
///
/// Storage is channel-major and contiguous. The shape is fixed at
/// construction: at least one channel, at least one sample, all channels of
/// equal length. A frame of a different shape is a new frame.
///
/// The `map` family produces a new frame (possibly of a different sample
/// type) and leaves the source untouched; the `zip_map` family reduces
/// across all channels at one sample index at a time. In-place mutation is
/// restricted to the explicit accessors and to filters, which advertise it
/// through the `*_inplace` naming convention.
///
/// ```
/// use adsp::Frame;
///
/// let frame = Frame::from_channels(vec![vec![1i16, 2], vec![3, 4]]).unwrap();
/// let scaled: Frame<f32> = frame.map(|x| x as f32 * 0.5);
/// assert_eq!(scaled.channel(1), &[1.5, 2.0]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame<T> {
    data: Vec<T>,
    channels: usize,
    samples: usize,
}

impl<T: Sample> Frame<T> {
    /// Create a zero-filled frame.
    pub fn new(channels: usize, samples: usize) -> Result<Self, Error> {
        if channels == 0 || samples == 0 {
            return Err(Error::InvalidShape);
        }
        Ok(Self {
            data: vec![T::ZERO; channels * samples],
            channels,
            samples,
        })
    }

    /// Create a frame owning the given per-channel sample vectors.
    ///
    /// Fails with [`Error::InvalidShape`] if there are no channels, no
    /// samples, or the channels are ragged.
    pub fn from_channels(channels: Vec<Vec<T>>) -> Result<Self, Error> {
        let samples = channels.first().map_or(0, Vec::len);
        if samples == 0 || channels.iter().any(|c| c.len() != samples) {
            return Err(Error::InvalidShape);
        }
        let mut data = Vec::with_capacity(channels.len() * samples);
        for channel in &channels {
            data.extend_from_slice(channel);
        }
        Ok(Self {
            data,
            channels: channels.len(),
            samples,
        })
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of samples per channel
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// One channel as a slice
    pub fn channel(&self, channel: usize) -> &[T] {
        &self.data[channel * self.samples..][..self.samples]
    }

    /// One channel as a mutable slice
    pub fn channel_mut(&mut self, channel: usize) -> &mut [T] {
        &mut self.data[channel * self.samples..][..self.samples]
    }

    /// One sample
    pub fn get(&self, channel: usize, index: usize) -> T {
        self.channel(channel)[index]
    }

    /// Overwrite one sample
    pub fn set(&mut self, channel: usize, index: usize, value: T) {
        self.channel_mut(channel)[index] = value;
    }

    /// A sub-range of one channel
    pub fn slice(&self, channel: usize, range: Range<usize>) -> &[T] {
        &self.channel(channel)[range]
    }

    /// Overwrite a sub-range of one channel.
    ///
    /// Fails with [`Error::InvalidArgument`] if `values` does not match the
    /// range length.
    pub fn set_slice(&mut self, channel: usize, range: Range<usize>, values: &[T]) -> Result<(), Error> {
        if values.len() != range.len() {
            return Err(Error::InvalidArgument);
        }
        self.channel_mut(channel)[range].copy_from_slice(values);
        Ok(())
    }

    /// Fill all channels with `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Fill `from..to` of every channel with `value`
    pub fn fill_range(&mut self, value: T, from: usize, to: usize) {
        for channel in 0..self.channels {
            self.channel_mut(channel)[from..to].fill(value);
        }
    }

    /// Fill all channels with zero
    pub fn clear(&mut self) {
        self.fill(T::ZERO);
    }

    /// Iterate over all samples, channel-major
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over channel slices
    pub fn iter_channels(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.samples)
    }

    /// Element-wise transform into a new frame
    pub fn map<R: Sample>(&self, mut f: impl FnMut(T) -> R) -> Frame<R> {
        Frame {
            data: self.data.iter().map(|&x| f(x)).collect(),
            channels: self.channels,
            samples: self.samples,
        }
    }

    /// Element-wise transform with the sample index
    pub fn map_indexed<R: Sample>(&self, mut f: impl FnMut(usize, T) -> R) -> Frame<R> {
        self.map_channels_indexed(|_, index, x| f(index, x))
    }

    /// Element-wise transform with the channel index
    pub fn map_channels<R: Sample>(&self, mut f: impl FnMut(usize, T) -> R) -> Frame<R> {
        self.map_channels_indexed(|channel, _, x| f(channel, x))
    }

    /// Element-wise transform with both channel and sample index
    pub fn map_channels_indexed<R: Sample>(&self, mut f: impl FnMut(usize, usize, T) -> R) -> Frame<R> {
        Frame {
            data: self
                .data
                .iter()
                .enumerate()
                .map(|(i, &x)| f(i / self.samples, i % self.samples, x))
                .collect(),
            channels: self.channels,
            samples: self.samples,
        }
    }

    /// Reduce across all channels at each sample index.
    ///
    /// For every sample index the closure receives the column of one sample
    /// per channel and writes one output per channel.
    pub fn zip_map<R: Sample>(&self, mut f: impl FnMut(&[T], &mut [R])) -> Frame<R> {
        self.zip_map_indexed(|_, column, out| f(column, out))
    }

    /// [`Frame::zip_map()`] with the sample index
    pub fn zip_map_indexed<R: Sample>(&self, mut f: impl FnMut(usize, &[T], &mut [R])) -> Frame<R> {
        let mut result = Frame {
            data: vec![R::ZERO; self.channels * self.samples],
            channels: self.channels,
            samples: self.samples,
        };
        let mut column = vec![T::ZERO; self.channels];
        let mut out = vec![R::ZERO; self.channels];
        for index in 0..self.samples {
            for (channel, x) in column.iter_mut().enumerate() {
                *x = self.get(channel, index);
            }
            f(index, &column, &mut out);
            for (channel, &y) in out.iter().enumerate() {
                result.set(channel, index, y);
            }
        }
        result
    }

    /// Reduce across all channels at each sample index to one scalar,
    /// broadcast to all output channels.
    pub fn zip_map_scalar<R: Sample>(&self, mut f: impl FnMut(&[T]) -> R) -> Frame<R> {
        self.zip_map_scalar_indexed(|_, column| f(column))
    }

    /// [`Frame::zip_map_scalar()`] with the sample index
    pub fn zip_map_scalar_indexed<R: Sample>(&self, mut f: impl FnMut(usize, &[T]) -> R) -> Frame<R> {
        self.zip_map_indexed(|index, column, out| out.fill(f(index, column)))
    }
}
