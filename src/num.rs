use num_traits::{AsPrimitive, Float};

mod sealed {
    pub trait Sealed {}
}

/// Scalar sample type of a signal.
///
/// The set of implementors is closed and fixed: `i8`, `i16`, `i32`, `i64`,
/// `f32`, and `f64`. The trait is sealed, so instantiating any generic
/// component of this crate over another type is a compile-time error rather
/// than a runtime branch in a processing loop.
///
/// Integer arithmetic wraps at the native width and integer division
/// truncates. Floating point arithmetic is IEEE.
///
/// # Casts
///
/// [`Sample::from_f64()`] uses `as` semantics: truncation toward zero,
/// saturation at the integer bounds, NaN mapping to zero. [`Sample::pow()`]
/// for integer types is computed via `f64` exponentiation and cast back,
/// which can lose precision for large results. This is a documented
/// approximation, not a bug.
pub trait Sample: sealed::Sealed + Copy + PartialEq + PartialOrd + Default + 'static {
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;
    /// Addition (wrapping for integers)
    fn add(self, rhs: Self) -> Self;
    /// Subtraction (wrapping for integers)
    fn sub(self, rhs: Self) -> Self;
    /// Multiplication (wrapping for integers)
    fn mul(self, rhs: Self) -> Self;
    /// Division (truncating for integers, IEEE for floats)
    fn div(self, rhs: Self) -> Self;
    /// Magnitude (wrapping for integer `MIN`)
    fn abs(self) -> Self;
    /// Exponentiation
    fn pow(self, exp: Self) -> Self;
    /// Quantize a floating point value
    fn from_f64(value: f64) -> Self;
    /// Widen to floating point
    fn to_f64(self) -> f64;
}

macro_rules! impl_float {
    ($T:ty) => {
        impl sealed::Sealed for $T {}
        impl Sample for $T {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }
            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }
            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }
            fn div(self, rhs: Self) -> Self {
                self / rhs
            }
            fn abs(self) -> Self {
                Float::abs(self)
            }
            fn pow(self, exp: Self) -> Self {
                Float::powf(self, exp)
            }
            fn from_f64(value: f64) -> Self {
                value.as_()
            }
            fn to_f64(self) -> f64 {
                self.as_()
            }
        }
    };
}
impl_float!(f32);
impl_float!(f64);

macro_rules! impl_int {
    ($T:ty) => {
        impl sealed::Sealed for $T {}
        impl Sample for $T {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
            fn sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
            fn mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
            fn div(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }
            fn abs(self) -> Self {
                self.wrapping_abs()
            }
            fn pow(self, exp: Self) -> Self {
                Self::from_f64(Float::powf(self.to_f64(), exp.to_f64()))
            }
            fn from_f64(value: f64) -> Self {
                value.as_()
            }
            fn to_f64(self) -> f64 {
                self.as_()
            }
        }
    };
}
impl_int!(i8);
impl_int!(i16);
impl_int!(i32);
impl_int!(i64);

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! identities {
        ($name:ident, $T:ty, $values:expr) => {
            #[test]
            fn $name() {
                for x in $values {
                    assert_eq!(<$T>::ZERO.add(x), x);
                    assert_eq!(x.add(<$T>::ZERO), x);
                    assert_eq!(<$T>::ONE.mul(x), x);
                    assert_eq!(x.mul(<$T>::ONE), x);
                }
            }
        };
    }
    identities!(identities_i8, i8, [-128i8, -1, 0, 1, 127]);
    identities!(identities_i16, i16, [i16::MIN, -1, 0, 1, i16::MAX]);
    identities!(identities_i32, i32, [i32::MIN, -1, 0, 1, i32::MAX]);
    identities!(identities_i64, i64, [i64::MIN, -1, 0, 1, i64::MAX]);
    identities!(identities_f32, f32, [-1.5f32, 0.0, 1.0, 1e30]);
    identities!(identities_f64, f64, [-1.5f64, 0.0, 1.0, 1e300]);

    #[test]
    fn int_wraps() {
        assert_eq!(127i8.add(1), -128);
        assert_eq!(i16::MIN.sub(1), i16::MAX);
        assert_eq!(Sample::abs(i32::MIN), i32::MIN);
    }

    #[test]
    fn int_div_truncates() {
        assert_eq!(7i32.div(2), 3);
        assert_eq!((-7i32).div(2), -3);
    }

    #[test]
    fn int_pow_via_float() {
        assert_eq!(Sample::pow(2i32, 10), 1024);
        assert_eq!(Sample::pow(3i16, 2), 9);
        // i64 results beyond the f64 mantissa lose precision
        assert_ne!(Sample::pow(3i64, 39), 4_052_555_153_018_976_267);
    }

    #[test]
    fn from_f64_saturates() {
        assert_eq!(i8::from_f64(1e6), i8::MAX);
        assert_eq!(i8::from_f64(-1e6), i8::MIN);
        assert_eq!(i8::from_f64(-3.7), -3);
        assert_eq!(i32::from_f64(f64::NAN), 0);
    }
}
