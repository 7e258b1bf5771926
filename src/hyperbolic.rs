//! Hyperbolic and inverse hyperbolic functions (spec §4.11).
//!
//! `sinh`/`cosh` use trisection reduction (divide the argument by `3^k`,
//! sum a Taylor series, then reverse the reduction with the triple-angle
//! identity `k` times) following the same Newton/series-plus-reduction
//! texture as the teacher's `div.rs`/`log.rs`; no surviving teacher source
//! covers this operation directly, so the series/reduction bodies are
//! written from the spec.

use dashu_base::Sign;

use crate::repr::{FBig, Special};
use crate::round::Rounding;

/// `k` such that dividing the argument by `3^k` brings a Taylor series into
/// its fast-converging range: `5*ceil(ln2 * ln(precision))`, offset by the
/// argument's own binary magnitude (spec §4.11).
fn trisection_k(precision: usize, magnitude_bits: i64) -> u32 {
    let base = 5.0 * (core::f64::consts::LN_2 * (precision.max(1) as f64).ln()).ceil();
    let offset = magnitude_bits.max(0) as f64;
    (base + offset).max(1.0) as u32
}

fn pow3(k: u32) -> u64 {
    3u64.saturating_pow(k)
}

/// Taylor series for `sinh(u)` and `cosh(u)` on a small `u`, summed
/// together since they share odd/even terms of the same `u^n/n!` ladder.
fn sinh_cosh_series(u: &FBig, work_precision: usize, rounding: Rounding) -> (FBig, FBig) {
    let one = FBig::from_i64(1, work_precision, rounding);
    let target_exponent = -((work_precision as f64 * 3.32) as i64) - 8;

    let u2 = u.mul(u);
    let mut term = u.clone(); // u^1 / 1!
    let mut sinh_sum = u.clone();
    let mut cosh_sum = one.clone();
    let mut n: u64 = 1;
    loop {
        // advance term from u^n/n! to u^(n+2)/(n+2)!
        term = term.mul(&u2).div(&FBig::from_i64(((n + 1) * (n + 2)) as i64, work_precision, rounding));
        n += 2;
        if n % 2 == 1 {
            sinh_sum = sinh_sum.add(&term);
        } else {
            cosh_sum = cosh_sum.add(&term);
        }
        if term.is_zero() || term.exponent_raw() < target_exponent {
            break;
        }
        if n > 4 * work_precision as u64 + 64 {
            break;
        }
    }
    (sinh_sum, cosh_sum)
}

impl FBig {
    /// Hyperbolic sine.
    pub fn sinh(&self) -> Self {
        match self.special {
            Special::Nan => FBig::nan(self.precision, self.rounding),
            Special::Infinite => self.clone(),
            Special::Zero => self.clone(),
            Special::Normal => {
                let (s, _) = sinh_cosh(self);
                s
            }
        }
    }

    /// Hyperbolic cosine.
    pub fn cosh(&self) -> Self {
        match self.special {
            Special::Nan => FBig::nan(self.precision, self.rounding),
            Special::Infinite => FBig::infinity(self.precision, self.rounding, Sign::Positive),
            Special::Zero => FBig::from_i64(1, self.precision, self.rounding),
            Special::Normal => {
                let (_, c) = sinh_cosh(self);
                c
            }
        }
    }

    /// Hyperbolic tangent: `(e^2x - 1) / (e^2x + 1)`.
    pub fn tanh(&self) -> Self {
        match self.special {
            Special::Nan => FBig::nan(self.precision, self.rounding),
            Special::Infinite => FBig::from_i64(if self.sign == Sign::Negative { -1 } else { 1 }, self.precision, self.rounding),
            Special::Zero => self.clone(),
            Special::Normal => {
                let two_x = self.add(self);
                let e2x = two_x.exp();
                let one = FBig::from_i64(1, self.precision, self.rounding);
                e2x.sub(&one).div(&e2x.add(&one))
            }
        }
    }

    /// `asinh x = ln(x + sqrt(x^2 + 1))`.
    pub fn asinh(&self) -> Self {
        if self.is_nan() {
            return FBig::nan(self.precision, self.rounding);
        }
        if self.is_zero() {
            return self.clone();
        }
        if self.is_infinite() {
            return self.clone();
        }
        let one = FBig::from_i64(1, self.precision, self.rounding);
        let inner = self.mul(self).add(&one).sqrt();
        self.add(&inner).ln()
    }

    /// `acosh x = ln(x + sqrt(x^2 - 1))`, domain `x >= 1`.
    pub fn acosh(&self) -> Self {
        if self.is_nan() {
            return FBig::nan(self.precision, self.rounding);
        }
        let one = FBig::from_i64(1, self.precision, self.rounding);
        if self.less(&one) {
            return FBig::nan(self.precision, self.rounding);
        }
        if self.is_infinite() {
            return self.clone();
        }
        let inner = self.mul(self).sub(&one).sqrt();
        self.add(&inner).ln()
    }

    /// `atanh x = 1/2 * ln((1+x)/(1-x))`, domain `|x| < 1`.
    pub fn atanh(&self) -> Self {
        if self.is_nan() {
            return FBig::nan(self.precision, self.rounding);
        }
        let one = FBig::from_i64(1, self.precision, self.rounding);
        if self.abs().greater_equal(&one) {
            return FBig::nan(self.precision, self.rounding);
        }
        let half = one.div(&FBig::from_i64(2, self.precision, self.rounding));
        let ratio = one.add(self).div(&one.sub(self));
        half.mul(&ratio.ln())
    }
}

fn sinh_cosh(x: &FBig) -> (FBig, FBig) {
    let guard = crate::div::guard_digits(x.precision);
    let work_precision = x.precision + guard;
    let rounding = x.rounding;

    let negative = x.sign == Sign::Negative;
    let magnitude = x.abs().with_precision(work_precision);
    let k = trisection_k(work_precision, magnitude.exponent_raw().max(0));
    let divisor = FBig::from_i64(pow3(k) as i64, work_precision, rounding);
    let u = magnitude.div(&divisor);

    let (mut sinh_u, mut cosh_u) = sinh_cosh_series(&u, work_precision, rounding);
    let three = FBig::from_i64(3, work_precision, rounding);
    let four = FBig::from_i64(4, work_precision, rounding);
    for _ in 0..k {
        let sinh2 = sinh_u.mul(&sinh_u);
        let cosh2 = cosh_u.mul(&cosh_u);
        let new_sinh = sinh_u.mul(&three.add(&four.mul(&sinh2)));
        let new_cosh = cosh_u.mul(&four.mul(&cosh2).sub(&three));
        sinh_u = new_sinh;
        cosh_u = new_cosh;
    }

    let sinh_result = if negative { sinh_u.neg() } else { sinh_u };
    (
        sinh_result.with_precision(x.precision).with_rounding(x.rounding),
        cosh_u.with_precision(x.precision).with_rounding(x.rounding),
    )
}
