//! Exact (arbitrary-precision) arithmetic used when the interval filter is
//! indeterminate.
//!
//! Purpose
//! - Provide sign-exact `+`, `-`, `*`, and zero-comparison over values built
//!   losslessly from a floating-point scalar, so the kernel can always
//!   produce a definite answer.
//!
//! Why this design
//! - Backed by `num_rational::BigRational`, which needs no rounding policy
//!   of its own: rationals compose exactly under the three operations we
//!   need and sign comparison is exact by construction.
//! - `Exact::from_real` goes through `BigRational::from_float`, which reads
//!   the IEEE-754 mantissa/exponent directly, rather than round-tripping
//!   through a decimal string.

use crate::Real;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use std::ops::{Add, Mul, Neg, Sub};

/// An exact rational value, losslessly convertible from any finite `R`.
#[derive(Debug, Clone)]
pub(crate) struct Exact(BigRational);

impl Exact {
    /// Converts a finite floating-point value exactly; no precision is lost.
    pub(crate) fn from_real<R: Real>(x: R) -> Self {
        let x: f64 = x
            .to_f64()
            .expect("Real values convertible to f64 without loss of range");
        debug_assert!(x.is_finite(), "Exact::from_real requires a finite value");
        Exact(BigRational::from_float(x).expect("finite f64 always has an exact rational value"))
    }

    /// `-1`, `0`, or `+1` according to the exact sign.
    pub(crate) fn sign(&self) -> i32 {
        if self.0.is_zero() {
            0
        } else if self.0.is_positive() {
            1
        } else {
            -1
        }
    }
}

impl Add for Exact {
    type Output = Exact;
    fn add(self, rhs: Exact) -> Exact {
        Exact(self.0 + rhs.0)
    }
}

impl Sub for Exact {
    type Output = Exact;
    fn sub(self, rhs: Exact) -> Exact {
        Exact(self.0 - rhs.0)
    }
}

impl Mul for Exact {
    type Output = Exact;
    fn mul(self, rhs: Exact) -> Exact {
        Exact(self.0 * rhs.0)
    }
}

impl Neg for Exact {
    type Output = Exact;
    fn neg(self) -> Exact {
        Exact(-self.0)
    }
}

impl Add for &Exact {
    type Output = Exact;
    fn add(self, rhs: &Exact) -> Exact {
        Exact(&self.0 + &rhs.0)
    }
}

impl Sub for &Exact {
    type Output = Exact;
    fn sub(self, rhs: &Exact) -> Exact {
        Exact(&self.0 - &rhs.0)
    }
}

impl Mul for &Exact {
    type Output = Exact;
    fn mul(self, rhs: &Exact) -> Exact {
        Exact(&self.0 * &rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_matches_float_sign() {
        assert_eq!(Exact::from_real(3.5_f64).sign(), 1);
        assert_eq!(Exact::from_real(-3.5_f64).sign(), -1);
        assert_eq!(Exact::from_real(0.0_f64).sign(), 0);
    }

    #[test]
    fn arithmetic_is_exact_for_repeating_binary_fractions() {
        // 0.1 + 0.2 != 0.3 in f64, but the exact rationals built from the
        // actual stored bit patterns differ from the decimal values too;
        // what matters is that the sum's sign is still computed exactly.
        let a = Exact::from_real(0.1_f64);
        let b = Exact::from_real(0.2_f64);
        let sum = a + b;
        assert_eq!(sum.sign(), 1);
    }

    #[test]
    fn subtraction_can_reach_exact_zero() {
        let a = Exact::from_real(4.0_f64);
        let b = Exact::from_real(4.0_f64);
        assert_eq!((a - b).sign(), 0);
    }
}
