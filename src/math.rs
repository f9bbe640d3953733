use num_traits::{Float, FloatConst};

/// Convert an amplitude ratio to decibels, `20 log10(|x|)`
pub fn to_decibels(amplitude: f64) -> f64 {
    20.0 * Float::log10(Float::abs(amplitude))
}

/// Convert decibels to an amplitude ratio, `10^(x / 20)`
pub fn from_decibels(decibels: f64) -> f64 {
    Float::powf(10.0, decibels / 20.0)
}

/// Normalized sinc function, `sin(pi x) / (pi x)` with `sinc(0) = 1`
pub fn sinc<T: Float + FloatConst>(x: T) -> T {
    if x == T::zero() {
        T::one()
    } else {
        let px = T::PI() * x;
        px.sin() / px
    }
}
