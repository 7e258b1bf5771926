//! Circular trigonometric functions (spec §4.11). No surviving teacher
//! source covers this operation, so range reduction and series bodies are
//! written from the spec, in the same reduce-then-Taylor-series texture as
//! `hyperbolic.rs`/`log.rs`.

use dashu_base::Sign;

use crate::consts;
use crate::repr::{FBig, Special};
use crate::round::Rounding;

fn trisection_k(precision: usize, magnitude_bits: i64) -> u32 {
    let base = 5.0 * (core::f64::consts::LN_2 * (precision.max(1) as f64).ln()).ceil();
    let offset = magnitude_bits.max(0) as f64;
    (base + offset).max(1.0) as u32
}

fn pow3(k: u32) -> u64 {
    3u64.saturating_pow(k)
}

/// `sin(u)` Taylor series on a small `u`: `u - u^3/3! + u^5/5! - ...`.
fn sin_series(u: &FBig, work_precision: usize, rounding: Rounding) -> FBig {
    let target_exponent = -((work_precision as f64 * 3.32) as i64) - 8;
    let u2 = u.mul(u);
    let mut term = u.clone();
    let mut sum = u.clone();
    let mut n: u64 = 1;
    let mut positive = true;
    loop {
        term = term.mul(&u2).div(&FBig::from_i64(((n + 1) * (n + 2)) as i64, work_precision, rounding));
        n += 2;
        positive = !positive;
        sum = if positive { sum.add(&term) } else { sum.sub(&term) };
        if term.is_zero() || term.exponent_raw() < target_exponent {
            break;
        }
        if n > 4 * work_precision as u64 + 64 {
            break;
        }
    }
    sum
}

fn sin_reduced(u_raw: &FBig, work_precision: usize, rounding: Rounding) -> FBig {
    let k = trisection_k(work_precision, u_raw.exponent_raw().max(0));
    let divisor = FBig::from_i64(pow3(k) as i64, work_precision, rounding);
    let u = u_raw.div(&divisor);
    let mut s = sin_series(&u, work_precision, rounding);
    let three = FBig::from_i64(3, work_precision, rounding);
    let four = FBig::from_i64(4, work_precision, rounding);
    for _ in 0..k {
        let s3 = s.mul(&s).mul(&s);
        s = three.mul(&s).sub(&four.mul(&s3));
    }
    s
}

/// Reduce `|x|` into `[0, 2*pi)`, returning the reduced value.
fn reduce_mod_2pi(x: &FBig, work_precision: usize, rounding: Rounding) -> FBig {
    let two_pi = consts::pi(work_precision, rounding).mul(&FBig::from_i64(2, work_precision, rounding));
    let magnitude = x.abs();
    let quotient = magnitude.div(&two_pi).floor();
    let mut reduced = magnitude.sub(&quotient.mul(&two_pi));
    if reduced.sign == Sign::Negative {
        reduced = reduced.add(&two_pi);
    }
    reduced
}

impl FBig {
    /// Sine (spec §4.11).
    pub fn sin(&self) -> Self {
        match self.special {
            Special::Nan | Special::Infinite => FBig::nan(self.precision, self.rounding),
            Special::Zero => self.clone(),
            Special::Normal => {
                let guard = crate::div::guard_digits(self.precision);
                let work_precision = self.precision + guard;
                let rounding = self.rounding;
                let pi = consts::pi(work_precision, rounding);

                let mut v = reduce_mod_2pi(&self.clone().with_precision(work_precision), work_precision, rounding);
                let mut negate = self.sign == Sign::Negative;
                if v.greater_equal(&pi) {
                    v = v.sub(&pi);
                    negate = !negate;
                }
                let s = sin_reduced(&v, work_precision, rounding);
                let result = if negate { s.neg() } else { s };
                result.with_precision(self.precision).with_rounding(self.rounding)
            }
        }
    }

    /// Cosine, via `cos v = sin(pi/2 - v)` near the fold point and
    /// `cos v = sqrt(1 - sin^2 v)` (sign from the quadrant) elsewhere.
    pub fn cos(&self) -> Self {
        match self.special {
            Special::Nan | Special::Infinite => FBig::nan(self.precision, self.rounding),
            Special::Zero => FBig::from_i64(1, self.precision, self.rounding),
            Special::Normal => {
                let guard = crate::div::guard_digits(self.precision);
                let work_precision = self.precision + guard;
                let rounding = self.rounding;
                let pi = consts::pi(work_precision, rounding);
                let half_pi = pi.div(&FBig::from_i64(2, work_precision, rounding));

                let reduced = reduce_mod_2pi(&self.clone().with_precision(work_precision), work_precision, rounding);
                // fold to [0, pi/2] and track the sign from the quadrant.
                let (folded, negative) = if reduced.less_equal(&half_pi) {
                    (reduced.clone(), false)
                } else if reduced.less_equal(&pi) {
                    (pi.sub(&reduced), true)
                } else {
                    let three_half_pi = pi.add(&half_pi);
                    if reduced.less_equal(&three_half_pi) {
                        (reduced.sub(&pi), true)
                    } else {
                        (FBig::from_i64(2, work_precision, rounding).mul(&pi).sub(&reduced), false)
                    }
                };

                let tenth = FBig::from_i64(1, work_precision, rounding).div(&FBig::from_i64(10, work_precision, rounding));
                let distance_to_half_pi = half_pi.sub(&folded).abs();
                let value = if distance_to_half_pi.less(&tenth) {
                    let delta = half_pi.sub(&folded);
                    sin_reduced(&delta, work_precision, rounding)
                } else {
                    let s = sin_reduced(&folded, work_precision, rounding);
                    let one = FBig::from_i64(1, work_precision, rounding);
                    one.sub(&s.mul(&s)).sqrt()
                };
                let result = if negative { value.neg() } else { value };
                result.with_precision(self.precision).with_rounding(self.rounding)
            }
        }
    }

    /// Tangent, via `sin/cos` with the `near pi/2` reciprocal identity.
    pub fn tan(&self) -> Self {
        if self.is_nan() || self.is_infinite() {
            return FBig::nan(self.precision, self.rounding);
        }
        if self.is_zero() {
            return self.clone();
        }
        let c = self.cos();
        if c.is_zero() {
            return FBig::infinity(self.precision, self.rounding, Sign::Positive);
        }
        self.sin().div(&c)
    }

    /// `asin x = 2 * asin(x / (sqrt2 * sqrt(1 + sqrt(1 - x^2))))` applied
    /// repeatedly until the argument is small, then a Taylor series.
    pub fn asin(&self) -> Self {
        if self.is_nan() {
            return FBig::nan(self.precision, self.rounding);
        }
        let one = FBig::from_i64(1, self.precision, self.rounding);
        if self.abs().greater(&one) {
            return FBig::nan(self.precision, self.rounding);
        }
        if self.is_zero() {
            return self.clone();
        }
        let guard = crate::div::guard_digits(self.precision);
        let work_precision = self.precision + guard;
        let rounding = self.rounding;

        let negative = self.sign == Sign::Negative;
        let mut x = self.abs().with_precision(work_precision);
        let one_wp = FBig::from_i64(1, work_precision, rounding);
        let sqrt2 = consts::sqrt2(work_precision, rounding);
        let mut reductions = 0u32;
        let threshold = one_wp.div(&FBig::from_i64(2, work_precision, rounding));
        while x.greater(&threshold) && reductions < 64 {
            let inner = sqrt2.mul(&one_wp.add(&one_wp.sub(&x.mul(&x)).sqrt()).sqrt());
            x = x.div(&inner);
            reductions += 1;
        }

        let series = asin_series(&x, work_precision, rounding);
        let mut result = series;
        for _ in 0..reductions {
            result = result.add(&result);
        }
        let result = if negative { result.neg() } else { result };
        result.with_precision(self.precision).with_rounding(self.rounding)
    }

    /// `acos x = pi/2 - asin x`.
    pub fn acos(&self) -> Self {
        if self.is_nan() || self.abs().greater(&FBig::from_i64(1, self.precision, self.rounding)) {
            return FBig::nan(self.precision, self.rounding);
        }
        let half_pi = consts::pi(self.precision, self.rounding).div(&FBig::from_i64(2, self.precision, self.rounding));
        half_pi.sub(&self.asin())
    }

    /// `atan x = 2 * atan(x / (1 + sqrt(1 + x^2)))` applied repeatedly,
    /// then a Taylor series.
    pub fn atan(&self) -> Self {
        if self.is_nan() {
            return FBig::nan(self.precision, self.rounding);
        }
        if self.is_infinite() {
            let half_pi = consts::pi(self.precision, self.rounding).div(&FBig::from_i64(2, self.precision, self.rounding));
            return if self.sign == Sign::Negative { half_pi.neg() } else { half_pi };
        }
        if self.is_zero() {
            return self.clone();
        }
        let guard = crate::div::guard_digits(self.precision);
        let work_precision = self.precision + guard;
        let rounding = self.rounding;

        let negative = self.sign == Sign::Negative;
        let mut x = self.abs().with_precision(work_precision);
        let one = FBig::from_i64(1, work_precision, rounding);
        let threshold = one.div(&FBig::from_i64(4, work_precision, rounding));
        let mut reductions = 0u32;
        while x.greater(&threshold) && reductions < 64 {
            let denom = one.add(&one.add(&x.mul(&x)).sqrt());
            x = x.div(&denom);
            reductions += 1;
        }

        let mut result = atan_series(&x, work_precision, rounding);
        for _ in 0..reductions {
            result = result.add(&result);
        }
        let result = if negative { result.neg() } else { result };
        result.with_precision(self.precision).with_rounding(self.rounding)
    }

    /// Two-argument arctangent, handling the axis/zero cases explicitly
    /// and otherwise computing `atan(y/x)` with a `+-pi` correction in the
    /// left half-plane.
    pub fn atan2(&self, x: &Self) -> Self {
        let y = self;
        if y.is_nan() || x.is_nan() {
            return FBig::nan(y.precision.max(x.precision), y.rounding);
        }
        let precision = y.precision.max(x.precision);
        let rounding = y.rounding;
        let pi = consts::pi(precision, rounding);
        let half_pi = pi.div(&FBig::from_i64(2, precision, rounding));

        if x.is_zero() {
            if y.is_zero() {
                return FBig::zero(precision, rounding, Sign::Positive);
            }
            return if y.sign == Sign::Negative { half_pi.neg() } else { half_pi };
        }
        if y.is_zero() {
            return if x.sign == Sign::Negative {
                if y.sign == Sign::Negative { pi.neg() } else { pi }
            } else {
                FBig::zero(precision, rounding, y.sign)
            };
        }

        let base = y.div(x).atan();
        if x.sign == Sign::Positive {
            base
        } else if y.sign == Sign::Negative {
            base.sub(&pi)
        } else {
            base.add(&pi)
        }
    }
}

fn asin_series(u: &FBig, work_precision: usize, rounding: Rounding) -> FBig {
    let target_exponent = -((work_precision as f64 * 3.32) as i64) - 8;
    let u2 = u.mul(u);
    let mut term = u.clone();
    let mut sum = u.clone();
    let mut n: u64 = 0;
    loop {
        // term_{n+1} = term_n * (2n+1)^2 / (2*(n+1)*(2n+3)) * u^2
        let num = FBig::from_i64(((2 * n + 1) * (2 * n + 1)) as i64, work_precision, rounding);
        let den = FBig::from_i64((2 * (n + 1) * (2 * n + 3)) as i64, work_precision, rounding);
        term = term.mul(&u2).mul(&num).div(&den);
        sum = sum.add(&term);
        n += 1;
        if term.is_zero() || term.exponent_raw() < target_exponent {
            break;
        }
        if n > 4 * work_precision as u64 + 64 {
            break;
        }
    }
    sum
}

fn atan_series(u: &FBig, work_precision: usize, rounding: Rounding) -> FBig {
    let target_exponent = -((work_precision as f64 * 3.32) as i64) - 8;
    let u2 = u.mul(u);
    let mut term = u.clone();
    let mut sum = u.clone();
    let mut n: u64 = 1;
    let mut positive = true;
    loop {
        term = term.mul(&u2);
        n += 2;
        positive = !positive;
        let signed_term = term.div(&FBig::from_i64(n as i64, work_precision, rounding));
        sum = if positive { sum.add(&signed_term) } else { sum.sub(&signed_term) };
        if signed_term.is_zero() || signed_term.exponent_raw() < target_exponent {
            break;
        }
        if n > 4 * work_precision as u64 + 64 {
            break;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> FBig {
        FBig::from_str_with(s, 30, Rounding::Nearest)
    }

    #[test]
    fn sin_cos_pythagorean_identity() {
        let x = p("0.7");
        let s = x.sin();
        let c = x.cos();
        let sum = s.mul(&s).add(&c.mul(&c));
        assert!((sum.to_f64() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sin_of_zero_is_zero() {
        assert!(p("0").sin().is_zero());
    }

    #[test]
    fn cos_of_zero_is_one() {
        assert!((p("0").cos().to_f64() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn asin_of_one_is_half_pi() {
        let v = p("1").asin();
        let half_pi = consts::pi(30, Rounding::Nearest).div(&FBig::from_i64(2, 30, Rounding::Nearest));
        assert!((v.to_f64() - half_pi.to_f64()).abs() < 1e-6);
    }

    #[test]
    fn atan2_quadrants() {
        let one = p("1");
        let neg_one = p("-1");
        let zero = FBig::zero(30, Rounding::Nearest, Sign::Positive);
        let r1 = one.atan2(&one);
        assert!(r1.to_f64() > 0.0);
        let r2 = one.atan2(&neg_one);
        assert!(r2.to_f64() > 0.0);
        let r3 = zero.atan2(&neg_one);
        assert!((r3.to_f64() - core::f64::consts::PI).abs() < 1e-6);
    }
}
