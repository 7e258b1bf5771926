//! Reciprocal via Newton iteration, and division built on top of it (spec
//! §4.5). Fast paths for powers of two and the multiplicative identity
//! avoid Newton iteration entirely.

use core::ops::{Div, DivAssign};

use dashu_base::Sign;
use dashu_int::UBig;

use crate::repr::{FBig, Special};
use crate::round::Rounding;

/// "a few guard digits" (spec §4.5 step 3): enough that the Newton
/// iteration's own rounding error doesn't leak into the final result after
/// it's rounded back down to `precision`.
pub(crate) fn guard_digits(precision: usize) -> usize {
    core::cmp::max(10, precision / 5)
}

/// Iterations needed for quadratic (doubling) convergence from a roughly
/// 15-bit-accurate `f64` seed up to `working_bits(precision)` bits, with a
/// handful extra for safety (spec §4.5: "`⌈log₂ W'⌉` iterations suffice").
fn max_newton_iterations(precision: usize) -> usize {
    let w = crate::round::working_bits(precision).max(2);
    (usize::BITS - (w as u32).leading_zeros()) as usize + 8
}

impl FBig {
    pub fn reciprocal(&self) -> Self {
        match self.special {
            Special::Nan => FBig::nan(self.precision, self.rounding),
            Special::Zero => FBig::infinity(self.precision, self.rounding, self.sign),
            Special::Infinite => FBig::zero(self.precision, self.rounding, self.sign),
            Special::Normal => reciprocal_normal(self),
        }
    }

    pub fn div(&self, other: &Self) -> Self {
        let precision = self.precision.max(other.precision);
        let rounding = self.rounding;
        let sign = self.sign * other.sign;

        use Special::*;
        match (self.special, other.special) {
            (Nan, _) | (_, Nan) => FBig::nan(precision, rounding),
            (Infinite, Infinite) => FBig::nan(precision, rounding),
            (Infinite, _) => FBig::infinity(precision, rounding, sign),
            (_, Infinite) => FBig::zero(precision, rounding, sign),
            (Zero, Zero) => FBig::nan(precision, rounding),
            (Zero, _) => FBig::zero(precision, rounding, sign),
            (_, Zero) => FBig::infinity(precision, rounding, sign),
            (Normal, Normal) => div_normals(self, other, precision, rounding),
        }
    }
}

fn is_one(x: &FBig) -> bool {
    x.significand() == &UBig::ONE && x.exponent_raw() == 0 && x.sign == Sign::Positive
}

fn div_normals(a: &FBig, b: &FBig, precision: usize, rounding: Rounding) -> FBig {
    let sign = a.sign * b.sign;

    // both pure powers of two: exponent subtraction only.
    if a.significand() == &UBig::ONE && b.significand() == &UBig::ONE {
        return FBig::from_raw_parts(sign, UBig::ONE, a.exponent_raw() - b.exponent_raw(), precision, rounding);
    }
    // b is a pure power of two: dividing only shifts the exponent.
    if b.significand() == &UBig::ONE {
        return FBig::from_raw_parts(sign, a.significand().clone(), a.exponent_raw() - b.exponent_raw(), precision, rounding);
    }
    // a == 1: division is exactly the reciprocal of b (sign-adjusted).
    if is_one(a) {
        let recip = b.reciprocal().with_precision(precision).with_rounding(rounding);
        return if sign == Sign::Negative { recip.neg() } else { recip };
    }
    // b == 1: division is a no-op beyond precision/rounding bookkeeping.
    if is_one(b) {
        return a.clone().with_precision(precision).with_rounding(rounding);
    }

    a.mul(&b.reciprocal().with_precision(precision).with_rounding(rounding))
}

fn reciprocal_normal(v: &FBig) -> FBig {
    let guard = guard_digits(v.precision);
    let work_precision = v.precision + guard;
    let rounding = v.rounding;

    // sit the magnitude in [1, 2) by zeroing the exponent; restore it after.
    let normalized = FBig::new_normal(Sign::Positive, v.significand().clone(), 0, work_precision, rounding);

    let seed = 1.0 / normalized.seed_f64();
    let mut u = FBig::from_f64(seed, work_precision, rounding);
    let two = FBig::from_i64(2, work_precision, rounding);
    let one = FBig::from_i64(1, work_precision, rounding);
    let target_exponent = -(crate::round::working_bits(work_precision) as i64);

    for _ in 0..max_newton_iterations(work_precision) {
        let r = two.sub(&normalized.mul(&u));
        u = u.mul(&r);
        let delta = r.sub(&one);
        if delta.is_zero() || delta.exponent_raw() < target_exponent {
            break;
        }
    }

    u.exponent -= v.exponent_raw();
    u.sign = v.sign;
    u.with_precision(v.precision).with_rounding(v.rounding)
}

impl Div<FBig> for FBig {
    type Output = FBig;
    fn div(self, rhs: FBig) -> FBig {
        FBig::div(&self, &rhs)
    }
}
impl Div<&FBig> for FBig {
    type Output = FBig;
    fn div(self, rhs: &FBig) -> FBig {
        FBig::div(&self, rhs)
    }
}
impl Div<FBig> for &FBig {
    type Output = FBig;
    fn div(self, rhs: FBig) -> FBig {
        FBig::div(self, &rhs)
    }
}
impl Div<&FBig> for &FBig {
    type Output = FBig;
    fn div(self, rhs: &FBig) -> FBig {
        FBig::div(self, rhs)
    }
}
impl DivAssign<FBig> for FBig {
    fn div_assign(&mut self, rhs: FBig) {
        *self = FBig::div(self, &rhs);
    }
}
impl DivAssign<&FBig> for FBig {
    fn div_assign(&mut self, rhs: &FBig) {
        *self = FBig::div(self, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> FBig {
        FBig::from_str_with(s, 50, Rounding::Nearest)
    }

    #[test]
    fn reciprocal_of_one_is_one() {
        let one = p("1");
        let r = one.reciprocal();
        assert!((r.to_f64() - 1.0).abs() < 1e-40);
    }

    #[test]
    fn reciprocal_roundtrip() {
        let a = p("7");
        let r = a.reciprocal();
        let product = &a * &r;
        assert!((product.to_f64() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn reciprocal_of_zero_is_infinity() {
        let z = FBig::zero(50, Rounding::Nearest, Sign::Positive);
        assert!(z.reciprocal().is_infinite());
    }

    #[test]
    fn reciprocal_of_infinity_is_zero() {
        let inf = FBig::infinity(50, Rounding::Nearest, Sign::Positive);
        assert!(inf.reciprocal().is_zero());
    }

    #[test]
    fn division_by_power_of_two_is_exact() {
        let a = p("3");
        let b = p("2");
        let q = &a / &b;
        assert!((q.to_f64() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn zero_over_zero_is_nan() {
        let z = FBig::zero(50, Rounding::Nearest, Sign::Positive);
        assert!((&z / &z).is_nan());
    }
}
