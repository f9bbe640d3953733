use alloc::vec::Vec;

use num_complex::Complex64;

use crate::{Error, Filter, Frame, Sample, ShiftBuffer, polynomial_from_roots};

/// Direct-form-I recursive (IIR) filter.
///
/// Holds a feedback coefficient array `a`, a feedforward array `b` of the
/// same length, and two [`ShiftBuffer`] delay lines per instance (input and
/// output history) with independent per-channel state. Per sample the
/// difference equation
///
/// ```text
/// y[n] = (b[0]*x[n] + sum_{k>=1} b[k]*x[n-k] - a[k]*y[n-k]) / a[0]
/// ```
///
/// is accumulated in `f64`; the output written back into the frame and into
/// the output history is the quantized sample value, so integer instances
/// feed back their quantized outputs, exactly as they were emitted.
///
/// `a[0]` is the normalization divisor and must be non-zero; this is
/// checked at construction, not per sample. Coefficients are immutable for
/// the filter's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Iir<T> {
    a: Vec<f64>,
    b: Vec<f64>,
    x: ShiftBuffer<T>,
    y: ShiftBuffer<T>,
}

impl<T: Sample> Iir<T> {
    /// Create a filter from feedback (`a`) and feedforward (`b`)
    /// coefficients.
    ///
    /// Fails with [`Error::InvalidArgument`] if either list is empty, the
    /// lengths differ, or `a[0]` is zero.
    pub fn new(channels: usize, a: Vec<f64>, b: Vec<f64>) -> Result<Self, Error> {
        if a.is_empty() || a.len() != b.len() || a[0] == 0.0 {
            return Err(Error::InvalidArgument);
        }
        let x = ShiftBuffer::new(channels, a.len() + 1)?;
        let y = x.clone();
        Ok(Self { a, b, x, y })
    }

    /// Create a filter whose transfer function has the given zeros and
    /// poles.
    ///
    /// The assignment is by role, not by argument position: the pole list
    /// expands to the feedback coefficients `a` (denominator) and the zero
    /// list to the feedforward coefficients `b` (numerator), each via
    /// [`polynomial_from_roots()`] with implicit conjugate closure. Both
    /// expansions must come out the same length (equal counts of roots
    /// after closure), else [`Error::InvalidArgument`].
    pub fn from_roots(channels: usize, zeros: &[Complex64], poles: &[Complex64]) -> Result<Self, Error> {
        Self::new(
            channels,
            polynomial_from_roots(poles),
            polynomial_from_roots(zeros),
        )
    }

    /// Feedback coefficients (denominator)
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Feedforward coefficients (numerator)
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Configured channel count
    pub fn channels(&self) -> usize {
        self.x.channels()
    }
}

impl<T: Sample> Filter<T> for Iir<T> {
    fn process_inplace(&mut self, frame: &mut Frame<T>) -> Result<(), Error> {
        if frame.channels() != self.x.channels() {
            return Err(Error::ChannelMismatch {
                expected: self.x.channels(),
                got: frame.channels(),
            });
        }
        for channel in 0..frame.channels() {
            for index in 0..frame.samples() {
                let input = frame.get(channel, index);
                // History offset k-1 holds x[n-k]/y[n-k] between calls.
                let mut accumulator = 0.0;
                for k in 1..self.a.len() {
                    accumulator += self.b[k] * self.x.get(channel, k - 1).to_f64()
                        - self.a[k] * self.y.get(channel, k - 1).to_f64();
                }
                let output =
                    T::from_f64((accumulator + input.to_f64() * self.b[0]) / self.a[0]);
                frame.set(channel, index, output);
                self.x.shift(channel, -1);
                self.y.shift(channel, -1);
                self.x.set(channel, 0, input);
                self.y.set(channel, 0, output);
            }
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.x.clear();
        self.y.clear();
    }
}
