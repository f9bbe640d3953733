use alloc::vec;
use alloc::vec::Vec;

use num_complex::Complex64;

/// Expand a list of complex roots into real polynomial coefficients.
///
/// The result must be real-valued, so every root is closed under
/// conjugation before expansion: for each supplied root its conjugate is
/// added as well. The closure set deduplicates by exact value in insertion
/// order, so a real root (imaginary part exactly `0.0`) appears once, and
/// supplying a root twice does not raise its multiplicity. Callers must
/// pass real roots with exactly zero imaginary part; no epsilon tolerance
/// is applied.
///
/// The running polynomial starts at the constant `1` and is multiplied by
/// `(x - r)` per root via `x*p(x) - r*p(x)`. Coefficients are returned
/// highest power first, so the result is monic: `coefficients[0] == 1.0`.
/// An empty root list yields `[1.0]`.
///
/// ```
/// use adsp::polynomial_from_roots;
/// use num_complex::Complex64;
///
/// // (x - 1)
/// assert_eq!(polynomial_from_roots(&[Complex64::new(1.0, 0.0)]), [1.0, -1.0]);
/// // (x - i)(x + i) = x^2 + 1
/// assert_eq!(polynomial_from_roots(&[Complex64::new(0.0, 1.0)]), [1.0, 0.0, 1.0]);
/// ```
pub fn polynomial_from_roots(roots: &[Complex64]) -> Vec<f64> {
    let mut closed: Vec<Complex64> = Vec::with_capacity(2 * roots.len());
    for root in roots {
        for candidate in [*root, root.conj()] {
            if !closed.contains(&candidate) {
                closed.push(candidate);
            }
        }
    }

    let mut polynomial = vec![Complex64::new(1.0, 0.0)];
    for root in closed {
        // Multiply by x (prepend a zero), then subtract root * p.
        let mut product = vec![Complex64::new(0.0, 0.0); polynomial.len() + 1];
        product[1..].copy_from_slice(&polynomial);
        for (shifted, coefficient) in product.iter_mut().zip(&polynomial) {
            *shifted -= *coefficient * root;
        }
        polynomial = product;
    }

    polynomial.reverse();
    polynomial.iter().map(|c| c.re).collect()
}
