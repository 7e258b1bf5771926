//! Natural and base-10 logarithm (spec §4.8), grounded on the teacher's
//! `float/src/log.rs::ln`: rescale `x` by a power of two so the remainder
//! sits near `1`, then sum the `2*atanh(z)` Maclaurin series and add back
//! `scale * ln2`.

use dashu_base::Sign;

use crate::consts;
use crate::repr::{FBig, Special};
use crate::round::Rounding;

impl FBig {
    /// Natural logarithm. `NaN`/negative inputs produce `NaN`; `0` produces
    /// `-infinity`; `+infinity` is a fixed point (spec §4.8 special cases).
    pub fn ln(&self) -> Self {
        match self.special {
            Special::Nan => FBig::nan(self.precision, self.rounding),
            Special::Infinite => {
                if self.sign == Sign::Negative {
                    FBig::nan(self.precision, self.rounding)
                } else {
                    FBig::infinity(self.precision, self.rounding, Sign::Positive)
                }
            }
            Special::Zero => FBig::infinity(self.precision, self.rounding, Sign::Negative),
            Special::Normal => {
                if self.sign == Sign::Negative {
                    return FBig::nan(self.precision, self.rounding);
                }
                ln_normal(self)
            }
        }
    }

    /// Base-10 logarithm: `ln(x) / ln(10)`.
    pub fn log10(&self) -> Self {
        match self.special {
            Special::Nan => FBig::nan(self.precision, self.rounding),
            Special::Infinite if self.sign == Sign::Negative => FBig::nan(self.precision, self.rounding),
            Special::Infinite => FBig::infinity(self.precision, self.rounding, Sign::Positive),
            Special::Zero => FBig::infinity(self.precision, self.rounding, Sign::Negative),
            Special::Normal if self.sign == Sign::Negative => FBig::nan(self.precision, self.rounding),
            Special::Normal => {
                let guard = crate::div::guard_digits(self.precision);
                let work_precision = self.precision + guard;
                let ln_self = ln_normal(&self.clone().with_precision(work_precision));
                let ln10 = consts::ln10(work_precision, self.rounding);
                ln_self.div(&ln10).with_precision(self.precision).with_rounding(self.rounding)
            }
        }
    }
}

/// `ln` of a normal, positive, finite `FBig` (teacher `log.rs::ln`, adapted
/// from the teacher's const-radix `B` to this crate's fixed binary radix).
fn ln_normal(x: &FBig) -> FBig {
    let guard = crate::div::guard_digits(x.precision);
    let work_precision = x.precision + guard;
    let rounding = x.rounding;

    // scale by a power of two so the significand*2^0 lands in [1, 2):
    // x == x_scaled * 2^scale.
    let scale = x.exponent_raw();
    let x_scaled = FBig::new_normal(Sign::Positive, x.significand().clone(), 0, work_precision, rounding);

    // z = (x-1)/(x+1); ln(x) = 2*atanh(z) = 2*sum_{k odd} z^k/k
    let one = FBig::from_i64(1, work_precision, rounding);
    let z = x_scaled.sub(&one).div(&x_scaled.add(&one));

    let max_k = acoth_term_count(work_precision, &z);
    let z2 = z.mul(&z);
    let mut pow = z.clone();
    let mut sum = z.clone();
    let mut k = 3u64;
    while k <= max_k {
        pow = pow.mul(&z2);
        let term = pow.div(&FBig::from_i64(k as i64, work_precision, rounding));
        sum = sum.add(&term);
        k += 2;
    }
    let two = FBig::from_i64(2, work_precision, rounding);
    let series = two.mul(&sum);

    let ln2 = consts::ln2(work_precision, rounding);
    let scaled_ln2 = ln2.mul(&FBig::from_i64(scale, work_precision, rounding));
    series.add(&scaled_ln2).with_precision(x.precision).with_rounding(x.rounding)
}

/// Series term count so `z^max_k / max_k` is below the working precision's
/// resolution, following the teacher's `iacoth`/`ln` bound: `i <= p /
/// log2(1/z) + 1` expressed in decimal digits via `log10`.
fn acoth_term_count(precision: usize, z: &FBig) -> u64 {
    let z_f = z.to_f64().abs().max(1e-12);
    if z_f <= 0.0 {
        return 3;
    }
    let bound = (precision as f64) / (-z_f.log10()).max(1e-6);
    (bound.ceil() as u64 + 4) | 1 // ensure odd, matching the (3..=max_k).step_by(2) series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> FBig {
        FBig::from_str_with(s, 30, Rounding::Nearest)
    }

    #[test]
    fn ln_of_e_is_one() {
        let e = consts::e(30, Rounding::Nearest);
        let v = e.ln();
        assert!((v.to_f64() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ln_of_one_is_zero() {
        let v = p("1").ln();
        assert!(v.to_f64().abs() < 1e-9);
    }

    #[test]
    fn ln_of_zero_is_negative_infinity() {
        let z = FBig::zero(30, Rounding::Nearest, Sign::Positive);
        let v = z.ln();
        assert!(v.is_infinite() && v.sign == Sign::Negative);
    }

    #[test]
    fn ln_of_negative_is_nan() {
        assert!(p("-1").ln().is_nan());
    }

    #[test]
    fn log10_of_hundred_is_two() {
        let v = p("100").log10();
        assert!((v.to_f64() - 2.0).abs() < 1e-6);
    }
}
