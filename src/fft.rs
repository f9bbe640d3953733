use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;

use num_complex::Complex64;
use num_traits::Float;

use crate::{Error, Frame, Sample};

/// In-place iterative radix-2 Cooley-Tukey transform over split
/// real/imaginary arrays.
///
/// The length must be a power of two (and non-zero) and both arrays equal
/// in length, else [`Error::InvalidLength`]. The output is unnormalized:
/// magnitudes scale with the length. There is no inverse transform.
///
/// Bit-reversal reordering tracks the reversed index with a running mask
/// instead of recomputing the reversal per index. The butterfly passes
/// recompute the twiddle factor once per group from the angle
/// `-pi * (group + 1) / step`, not per butterfly.
pub fn fft_inplace(re: &mut [f64], im: &mut [f64]) -> Result<(), Error> {
    let n = re.len();
    if im.len() != n || !n.is_power_of_two() {
        return Err(Error::InvalidLength);
    }

    // Bit-reversal permutation; swap only when the target is ahead so each
    // pair moves once.
    let mut target = 0;
    for position in 0..n {
        if target > position {
            re.swap(position, target);
            im.swap(position, target);
        }
        let mut mask = n;
        loop {
            mask >>= 1;
            if target & mask == 0 {
                break;
            }
            target &= !mask;
        }
        target |= mask;
    }

    let mut step = 1;
    while step < n {
        let jump = step << 1;
        let mut twiddle = (1.0f64, 0.0f64);
        for group in 0..step {
            let mut pair = group;
            while pair < n {
                let index = pair + step;
                let product = (
                    twiddle.0 * re[index] - twiddle.1 * im[index],
                    twiddle.0 * im[index] + twiddle.1 * re[index],
                );
                re[index] = re[pair] - product.0;
                im[index] = im[pair] - product.1;
                re[pair] += product.0;
                im[pair] += product.1;
                pair += jump;
            }
            // Twiddle for the next group of this pass.
            let angle = -PI * (group as f64 + 1.0) / step as f64;
            let (sin, cos) = Float::sin_cos(angle);
            twiddle = (cos, sin);
        }
        step = jump;
    }
    Ok(())
}

/// Transform a complex signal into its unnormalized spectrum.
///
/// The input is copied; it is never mutated.
///
/// ```
/// use adsp::fft;
/// use num_complex::Complex64;
///
/// let impulse = [
///     Complex64::new(1.0, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(0.0, 0.0),
/// ];
/// let spectrum = fft(&impulse).unwrap();
/// assert!(spectrum.iter().all(|c| *c == Complex64::new(1.0, 0.0)));
/// ```
pub fn fft(input: &[Complex64]) -> Result<Vec<Complex64>, Error> {
    let mut re: Vec<f64> = input.iter().map(|c| c.re).collect();
    let mut im: Vec<f64> = input.iter().map(|c| c.im).collect();
    fft_inplace(&mut re, &mut im)?;
    Ok(re
        .into_iter()
        .zip(im)
        .map(|(re, im)| Complex64::new(re, im))
        .collect())
}

/// Transform one real-valued channel (imaginary parts zero).
pub fn fft_real<T: Sample>(input: &[T]) -> Result<Vec<Complex64>, Error> {
    let mut re: Vec<f64> = input.iter().map(|x| x.to_f64()).collect();
    let mut im = vec![0.0; input.len()];
    fft_inplace(&mut re, &mut im)?;
    Ok(re
        .into_iter()
        .zip(im)
        .map(|(re, im)| Complex64::new(re, im))
        .collect())
}

/// Transform channel 0 of a frame.
pub fn fft_frame<T: Sample>(frame: &Frame<T>) -> Result<Vec<Complex64>, Error> {
    fft_real(frame.channel(0))
}
