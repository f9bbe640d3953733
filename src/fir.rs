use alloc::vec::Vec;

use num_complex::Complex64;

use crate::{Error, Filter, Frame, Sample, ShiftBuffer, polynomial_from_roots};

/// Direct-form transversal (FIR) filter.
///
/// Holds one coefficient array and one [`ShiftBuffer`] delay line per
/// instance with independent per-channel state. Each sample is pushed into
/// the delay line (origin shift plus one write, no data movement) and the
/// output is the dot product of the coefficients with the input history,
/// accumulated in `f64` and quantized back to the sample type.
///
/// Coefficients are fixed for the filter's lifetime; only the delay-line
/// state changes per call.
///
/// ```
/// use adsp::{Filter, Fir, Frame};
///
/// let mut frame = Frame::from_channels(vec![vec![1.0f64, 1.0, 1.0, 1.0]]).unwrap();
/// let mut fir = Fir::new(1, vec![0.5, 0.5]).unwrap();
/// fir.process_inplace(&mut frame).unwrap();
/// // After the zero-filled delay line drains, a 2-point moving average.
/// assert_eq!(frame.channel(0), &[0.5, 1.0, 1.0, 1.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Fir<T> {
    coefficients: Vec<f64>,
    buffer: ShiftBuffer<T>,
}

impl<T: Sample> Fir<T> {
    /// Create a filter from feedforward coefficients.
    ///
    /// Fails with [`Error::InvalidArgument`] on an empty coefficient list.
    pub fn new(channels: usize, coefficients: Vec<f64>) -> Result<Self, Error> {
        if coefficients.is_empty() {
            return Err(Error::InvalidArgument);
        }
        let buffer = ShiftBuffer::new(channels, coefficients.len() + 1)?;
        Ok(Self {
            coefficients,
            buffer,
        })
    }

    /// Create a filter whose transfer function has the given zeros.
    ///
    /// The zero list is expanded to coefficients by
    /// [`polynomial_from_roots()`] (conjugates are added implicitly). An
    /// empty list yields the identity filter.
    pub fn from_zeros(channels: usize, zeros: &[Complex64]) -> Result<Self, Error> {
        Self::new(channels, polynomial_from_roots(zeros))
    }

    /// Feedforward coefficients
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Configured channel count
    pub fn channels(&self) -> usize {
        self.buffer.channels()
    }
}

impl<T: Sample> Filter<T> for Fir<T> {
    fn process_inplace(&mut self, frame: &mut Frame<T>) -> Result<(), Error> {
        if frame.channels() != self.buffer.channels() {
            return Err(Error::ChannelMismatch {
                expected: self.buffer.channels(),
                got: frame.channels(),
            });
        }
        for channel in 0..frame.channels() {
            for index in 0..frame.samples() {
                self.buffer.shift(channel, -1);
                self.buffer.set(channel, 0, frame.get(channel, index));
                let output = self
                    .coefficients
                    .iter()
                    .enumerate()
                    .map(|(k, b)| b * self.buffer.get(channel, k).to_f64())
                    .sum();
                frame.set(channel, index, T::from_f64(output));
            }
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::allclose;

    #[test]
    fn rejects_empty_coefficients() {
        assert_eq!(Fir::<f32>::new(1, vec![]), Err(Error::InvalidArgument));
    }

    #[test]
    fn rejects_channel_mismatch() {
        let mut fir = Fir::new(2, vec![1.0]).unwrap();
        let mut frame = Frame::<f32>::new(3, 4).unwrap();
        assert_eq!(
            fir.process_inplace(&mut frame),
            Err(Error::ChannelMismatch {
                expected: 2,
                got: 3
            })
        );
    }

    #[test]
    fn unit_coefficient_is_identity() {
        let mut fir = Fir::new(2, vec![1.0]).unwrap();
        let frame = Frame::from_channels(vec![vec![1i16, -2, 3, -4], vec![5, 6, -7, 8]]).unwrap();
        assert_eq!(fir.process(&frame).unwrap(), frame);
    }

    #[test]
    fn moving_average_steady_state() {
        let mut fir = Fir::new(1, vec![0.5, 0.5]).unwrap();
        let mut frame = Frame::from_channels(vec![vec![1.0f64; 8]]).unwrap();
        fir.process_inplace(&mut frame).unwrap();
        assert_eq!(frame.get(0, 0), 0.5);
        assert!(frame.channel(0)[1..].iter().all(|&y| y == 1.0));
    }

    #[test]
    fn state_spans_frames() {
        let mut fir = Fir::new(1, vec![0.0, 1.0]).unwrap();
        let first = Frame::from_channels(vec![vec![1.0f64, 2.0]]).unwrap();
        let second = Frame::from_channels(vec![vec![3.0f64, 4.0]]).unwrap();
        // One-sample delay across the frame boundary.
        assert_eq!(fir.process(&first).unwrap().channel(0), &[0.0, 1.0]);
        assert_eq!(fir.process(&second).unwrap().channel(0), &[2.0, 3.0]);
    }

    #[test]
    fn from_zeros_expands() {
        // Zero at z = 1: coefficients [1, -1], a first difference.
        let mut fir = Fir::from_zeros(1, &[Complex64::new(1.0, 0.0)]).unwrap();
        assert_eq!(fir.coefficients(), &[1.0, -1.0]);
        let frame = Frame::from_channels(vec![vec![1.0f64, 1.0, 1.0]]).unwrap();
        assert!(allclose(
            fir.process(&frame).unwrap().channel(0),
            &[1.0, 0.0, 0.0],
            0.0,
            1e-12
        ));
    }

    #[test]
    fn reset_matches_fresh() {
        let coefficients = vec![0.25, 0.5, 0.25];
        let impulse = Frame::from_channels(vec![vec![1.0f32, 0.0, 0.0, 0.0]]).unwrap();

        let mut used = Fir::new(1, coefficients.clone()).unwrap();
        used.process(&impulse).unwrap();
        used.reset();

        let mut fresh = Fir::new(1, coefficients).unwrap();
        assert_eq!(
            used.process(&impulse).unwrap(),
            fresh.process(&impulse).unwrap()
        );
    }

    #[test]
    fn integer_output_quantized() {
        let mut fir = Fir::new(1, vec![0.5]).unwrap();
        let frame = Frame::from_channels(vec![vec![3i32, -3]]).unwrap();
        // 1.5 and -1.5 truncate toward zero.
        assert_eq!(fir.process(&frame).unwrap().channel(0), &[1, -1]);
    }
}
