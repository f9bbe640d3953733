use alloc::vec::Vec;
use core::f64::consts::PI;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::{Error, Frame, Sample};

/// Precomputed window function taps.
///
/// A window is generated once for a fixed size and then applied to frames by
/// elementwise multiplication, the same taps across all channels. Taps are
/// stored in the sample type, so integer windows are quantized at
/// construction time, not per apply.
///
/// The named constructors produce the usual symmetric windows with weights
/// spanning `ZERO..ONE`; [`Window::make()`] accepts an arbitrary weight
/// generator and output range for custom shapes.
///
/// ```
/// use adsp::Window;
///
/// let hann = Window::<f64>::hann(5).unwrap();
/// assert_eq!(hann.get(0), 0.0);
/// assert_eq!(hann.get(2), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window<T> {
    taps: Vec<T>,
}

impl<T: Sample> Window<T> {
    /// Build a window from a weight generator.
    ///
    /// `weight(index)` must return a value in the unit interval for every
    /// `index` below `size`; each tap is `min + (max - min) * weight(index)`
    /// quantized to the sample type. Fails with [`Error::InvalidShape`] on
    /// zero size and [`Error::InvalidArgument`] if `min >= max` or a weight
    /// leaves the unit interval. Weights within rounding error of the
    /// interval ends are clamped rather than rejected.
    pub fn make(
        size: usize,
        min: T,
        max: T,
        mut weight: impl FnMut(usize) -> f64,
    ) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::InvalidShape);
        }
        let lo = min.to_f64();
        let hi = max.to_f64();
        if lo >= hi {
            return Err(Error::InvalidArgument);
        }
        let mut taps = Vec::with_capacity(size);
        for index in 0..size {
            let w = weight(index);
            if !(-1e-9..=1.0 + 1e-9).contains(&w) {
                return Err(Error::InvalidArgument);
            }
            taps.push(T::from_f64(lo + (hi - lo) * w.clamp(0.0, 1.0)));
        }
        Ok(Self { taps })
    }

    /// Number of taps
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// Tap at `index`, panics out of bounds
    pub fn get(&self, index: usize) -> T {
        self.taps[index]
    }

    /// All taps
    pub fn taps(&self) -> &[T] {
        &self.taps
    }

    /// Multiply each sample of each channel by the tap at its index.
    ///
    /// Fails with [`Error::InvalidLength`] if the frame's sample count
    /// differs from the window size.
    pub fn apply(&self, frame: &Frame<T>) -> Result<Frame<T>, Error> {
        if frame.samples() != self.taps.len() {
            return Err(Error::InvalidLength);
        }
        Ok(frame.map_indexed(|index, x| x.mul(self.taps[index])))
    }

    fn cosine_sum_weight(span: f64, coefficients: &[f64]) -> impl FnMut(usize) -> f64 + '_ {
        move |index| {
            coefficients
                .iter()
                .enumerate()
                .map(|(k, a)| {
                    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                    sign * a * Float::cos(2.0 * PI * k as f64 * index as f64 / span)
                })
                .sum()
        }
    }

    /// All taps at `max`
    pub fn rectangular(size: usize) -> Result<Self, Error> {
        Self::make(size, T::ZERO, T::ONE, |_| 1.0)
    }

    /// Triangular window over a span of `size - 1 + l` samples.
    ///
    /// `l` of 0 gives the Bartlett window (zero endpoints), 1 the
    /// conventional triangular window, 2 the Fejer window.
    pub fn triangular(size: usize, l: usize) -> Result<Self, Error> {
        if l > 2 {
            return Err(Error::InvalidArgument);
        }
        let center = (size as f64 - 1.0) / 2.0;
        let half = (size as f64 - 1.0 + l as f64) / 2.0;
        Self::make(size, T::ZERO, T::ONE, |index| {
            if half == 0.0 {
                1.0
            } else {
                1.0 - ((index as f64 - center) / half).abs()
            }
        })
    }

    /// Piecewise cubic Parzen window
    pub fn parzen(size: usize) -> Result<Self, Error> {
        let center = (size as f64 - 1.0) / 2.0;
        let half = size as f64 / 2.0;
        Self::make(size, T::ZERO, T::ONE, |index| {
            let x = (index as f64 - center).abs() / half;
            if x <= 0.5 {
                1.0 - 6.0 * x * x * (1.0 - x)
            } else {
                2.0 * (1.0 - x) * (1.0 - x) * (1.0 - x)
            }
        })
    }

    /// Parabolic Welch window
    pub fn welch(size: usize) -> Result<Self, Error> {
        let half = (size as f64 - 1.0) / 2.0;
        Self::make(size, T::ZERO, T::ONE, |index| {
            if half == 0.0 {
                1.0
            } else {
                let x = (index as f64 - half) / half;
                1.0 - x * x
            }
        })
    }

    /// Half-period sine window
    pub fn sine(size: usize) -> Result<Self, Error> {
        let span = size as f64 - 1.0;
        Self::make(size, T::ZERO, T::ONE, |index| {
            if span == 0.0 {
                1.0
            } else {
                Float::sin(PI * index as f64 / span)
            }
        })
    }

    /// Generalized cosine-sum window.
    ///
    /// `coefficients[k]` weights the `k`-th harmonic with alternating sign,
    /// `sum_k (-1)^k a_k cos(2 pi k n / (size - 1))`. The named cosine-sum
    /// windows below are fixed coefficient sets for this constructor.
    pub fn cosine_sum(size: usize, coefficients: &[f64]) -> Result<Self, Error> {
        if size == 1 {
            return Self::rectangular(size);
        }
        let span = size as f64 - 1.0;
        Self::make(size, T::ZERO, T::ONE, Self::cosine_sum_weight(span, coefficients))
    }

    pub fn hann(size: usize) -> Result<Self, Error> {
        Self::cosine_sum(size, &[0.5, 0.5])
    }

    pub fn hamming(size: usize) -> Result<Self, Error> {
        Self::cosine_sum(size, &[0.53836, 0.46164])
    }

    pub fn blackman(size: usize) -> Result<Self, Error> {
        Self::cosine_sum(size, &[7938.0 / 18608.0, 9240.0 / 18608.0, 1430.0 / 18608.0])
    }

    pub fn nuttall(size: usize) -> Result<Self, Error> {
        Self::cosine_sum(size, &[0.355768, 0.487396, 0.144232, 0.012604])
    }

    pub fn blackman_nuttall(size: usize) -> Result<Self, Error> {
        Self::cosine_sum(size, &[0.3635819, 0.4891775, 0.1365995, 0.0106411])
    }

    pub fn blackman_harris(size: usize) -> Result<Self, Error> {
        Self::cosine_sum(size, &[0.35875, 0.48829, 0.14128, 0.01168])
    }

    /// Gaussian window with standard deviation `sigma` as a fraction of the
    /// half-span. `sigma` must be positive and at most `0.5`.
    pub fn gaussian(size: usize, sigma: f64) -> Result<Self, Error> {
        if sigma <= 0.0 || sigma > 0.5 {
            return Err(Error::InvalidArgument);
        }
        let half = (size as f64 - 1.0) / 2.0;
        Self::make(size, T::ZERO, T::ONE, |index| {
            if half == 0.0 {
                1.0
            } else {
                let x = (index as f64 - half) / (sigma * half);
                Float::exp(-0.5 * x * x)
            }
        })
    }

    /// Tapered-cosine window.
    ///
    /// `alpha` in `0.0..=1.0` is the fraction of the span spent in the
    /// cosine taper; `0.0` is rectangular, `1.0` is Hann.
    pub fn tukey(size: usize, alpha: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(Error::InvalidArgument);
        }
        let span = size as f64 - 1.0;
        let taper = alpha * span / 2.0;
        Self::make(size, T::ZERO, T::ONE, |index| {
            let n = index as f64;
            // Distance into the nearer taper region, symmetric about the center.
            let edge = n.min(span - n);
            if taper == 0.0 || edge >= taper {
                1.0
            } else {
                0.5 * (1.0 + Float::cos(PI * (edge / taper - 1.0)))
            }
        })
    }

    /// Planck-taper window.
    ///
    /// `epsilon` in `0.0..0.5` is the fraction of the span spent in each
    /// smooth taper; the endpoints are exactly zero.
    pub fn planck_taper(size: usize, epsilon: f64) -> Result<Self, Error> {
        if !(0.0..0.5).contains(&epsilon) {
            return Err(Error::InvalidArgument);
        }
        let span = size as f64 - 1.0;
        let taper = epsilon * span;
        Self::make(size, T::ZERO, T::ONE, |index| {
            let n = index as f64;
            let edge = n.min(span - n);
            if edge >= taper {
                1.0
            } else if edge <= 0.0 {
                0.0
            } else {
                1.0 / (1.0 + Float::exp(taper / edge - taper / (taper - edge)))
            }
        })
    }

    /// Central lobe of a sinc function
    pub fn lanczos(size: usize) -> Result<Self, Error> {
        let span = size as f64 - 1.0;
        Self::make(size, T::ZERO, T::ONE, |index| {
            if span == 0.0 {
                1.0
            } else {
                crate::sinc(2.0 * index as f64 / span - 1.0)
            }
        })
    }
}

/// Window shapes selectable by name.
///
/// Parameterized shapes use their conventional defaults: Bartlett span for
/// [`Triangular`](WindowKind::Triangular), `sigma = 0.4` for
/// [`Gaussian`](WindowKind::Gaussian), `alpha = 0.5` for
/// [`Tukey`](WindowKind::Tukey) and `epsilon = 0.1` for
/// [`PlanckTaper`](WindowKind::PlanckTaper). Use the [`Window`]
/// constructors directly to set the parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[derive(strum::EnumString, strum::AsRefStr, strum::EnumIter)]
pub enum WindowKind {
    Rectangular,
    Triangular,
    Parzen,
    Welch,
    Sine,
    Hann,
    Hamming,
    Blackman,
    Nuttall,
    BlackmanNuttall,
    BlackmanHarris,
    Gaussian,
    Tukey,
    PlanckTaper,
    Lanczos,
}

impl WindowKind {
    /// Build this window shape at the given size
    pub fn build<T: Sample>(&self, size: usize) -> Result<Window<T>, Error> {
        match self {
            Self::Rectangular => Window::rectangular(size),
            Self::Triangular => Window::triangular(size, 0),
            Self::Parzen => Window::parzen(size),
            Self::Welch => Window::welch(size),
            Self::Sine => Window::sine(size),
            Self::Hann => Window::hann(size),
            Self::Hamming => Window::hamming(size),
            Self::Blackman => Window::blackman(size),
            Self::Nuttall => Window::nuttall(size),
            Self::BlackmanNuttall => Window::blackman_nuttall(size),
            Self::BlackmanHarris => Window::blackman_harris(size),
            Self::Gaussian => Window::gaussian(size, 0.4),
            Self::Tukey => Window::tukey(size, 0.5),
            Self::PlanckTaper => Window::planck_taper(size, 0.1),
            Self::Lanczos => Window::lanczos(size),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{allclose, isclose};
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn make_validates() {
        assert_eq!(
            Window::<f32>::make(0, 0.0, 1.0, |_| 1.0),
            Err(Error::InvalidShape)
        );
        assert_eq!(
            Window::<f32>::make(4, 1.0, 1.0, |_| 1.0),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            Window::<f32>::make(4, 0.0, 1.0, |i| i as f64),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn make_scales_range() {
        let window = Window::<f64>::make(2, -1.0, 3.0, |i| i as f64).unwrap();
        assert_eq!(window.taps(), &[-1.0, 3.0]);
    }

    #[test]
    fn hann_shape() {
        let window = Window::<f64>::hann(5).unwrap();
        assert!(allclose(window.taps(), &[0.0, 0.5, 1.0, 0.5, 0.0], 1e-12, 1e-12));
    }

    #[test]
    fn named_windows_are_symmetric_and_bounded() {
        for kind in WindowKind::iter() {
            let window = kind.build::<f64>(33).unwrap();
            for (index, &tap) in window.taps().iter().enumerate() {
                assert!((0.0..=1.0).contains(&tap), "{kind:?}[{index}] = {tap}");
                assert!(
                    isclose(tap, window.get(window.len() - 1 - index), 1e-12, 1e-12),
                    "{kind:?} asymmetric at {index}"
                );
            }
        }
    }

    #[test]
    fn cosine_sum_peaks_at_center() {
        for kind in [
            WindowKind::Hann,
            WindowKind::Blackman,
            WindowKind::Nuttall,
            WindowKind::BlackmanHarris,
        ] {
            let window = kind.build::<f64>(65).unwrap();
            assert!(isclose(window.get(32), 1.0, 1e-9, 1e-9), "{kind:?}");
        }
    }

    #[test]
    fn tukey_limits() {
        let rectangular = Window::<f64>::tukey(16, 0.0).unwrap();
        assert!(rectangular.taps().iter().all(|&tap| tap == 1.0));
        let hann = Window::<f64>::tukey(16, 1.0).unwrap();
        let reference = Window::<f64>::hann(16).unwrap();
        assert!(allclose(hann.taps(), reference.taps(), 1e-12, 1e-12));
    }

    #[test]
    fn planck_taper_endpoints_are_zero() {
        let window = Window::<f64>::planck_taper(32, 0.25).unwrap();
        assert_eq!(window.get(0), 0.0);
        assert_eq!(window.get(31), 0.0);
        assert_eq!(window.get(16), 1.0);
    }

    #[test]
    fn single_tap_is_unity() {
        for kind in WindowKind::iter() {
            assert_eq!(kind.build::<f64>(1).unwrap().taps(), &[1.0], "{kind:?}");
        }
    }

    #[test]
    fn apply_multiplies_all_channels() {
        let window = Window::<f64>::make(3, 0.0, 1.0, |i| i as f64 / 2.0).unwrap();
        let frame = Frame::from_channels(vec![vec![2.0, 2.0, 2.0], vec![-4.0, -4.0, -4.0]]).unwrap();
        let output = window.apply(&frame).unwrap();
        assert_eq!(output.channel(0), &[0.0, 1.0, 2.0]);
        assert_eq!(output.channel(1), &[0.0, -2.0, -4.0]);
    }

    #[test]
    fn apply_rejects_size_mismatch() {
        let window = Window::<f64>::hann(8).unwrap();
        let frame = Frame::<f64>::new(1, 7).unwrap();
        assert_eq!(window.apply(&frame), Err(Error::InvalidLength));
    }

    #[test]
    fn integer_taps_quantize_once() {
        let window = Window::<i16>::make(3, 0, 100, |i| i as f64 / 2.0).unwrap();
        assert_eq!(window.taps(), &[0, 50, 100]);
    }

    #[test]
    fn kind_parses_by_name() {
        assert_eq!(WindowKind::from_str("Hann"), Ok(WindowKind::Hann));
        assert_eq!(WindowKind::Hann.as_ref(), "Hann");
        assert!(WindowKind::from_str("NoSuchWindow").is_err());
    }
}
