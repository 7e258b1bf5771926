//! Square root via division-free Newton iteration on the reciprocal square
//! root (spec §4.6).

use dashu_base::{BitTest, Sign};
use dashu_int::UBig;

use crate::div::guard_digits;
use crate::repr::{FBig, Special};

fn max_newton_iterations(precision: usize) -> usize {
    let w = crate::round::working_bits(precision).max(2);
    (usize::BITS - (w as u32).leading_zeros()) as usize + 8
}

impl FBig {
    pub fn sqrt(&self) -> Self {
        match self.special {
            Special::Nan => FBig::nan(self.precision, self.rounding),
            Special::Infinite => {
                if self.sign == Sign::Negative {
                    FBig::nan(self.precision, self.rounding)
                } else {
                    FBig::infinity(self.precision, self.rounding, Sign::Positive)
                }
            }
            Special::Zero => FBig::zero(self.precision, self.rounding, Sign::Positive),
            Special::Normal => {
                if self.sign == Sign::Negative {
                    return FBig::nan(self.precision, self.rounding);
                }
                // exact power of four: significand == 1 and exponent even.
                if self.significand() == &UBig::ONE && self.exponent_raw().rem_euclid(2) == 0 {
                    let exponent = self.exponent_raw() / 2;
                    return FBig::from_raw_parts(Sign::Positive, UBig::ONE, exponent, self.precision, self.rounding);
                }
                sqrt_normal(self)
            }
        }
    }
}

fn sqrt_normal(y: &FBig) -> FBig {
    let guard = guard_digits(y.precision);
    let work_precision = y.precision + guard;
    let rounding = y.rounding;

    let exponent = y.exponent_raw();
    let h = exponent.div_euclid(2);
    let r = exponent.rem_euclid(2);

    // y re-exponented into [1, 4): same significand, exponent r.
    let y_normalized = FBig::new_normal(Sign::Positive, y.significand().clone(), r, work_precision, rounding);

    let seed = 1.0 / y_normalized.seed_f64().sqrt();
    let mut x = FBig::from_f64(seed, work_precision, rounding);

    let three = FBig::from_i64(3, work_precision, rounding);
    let half = FBig::from_i64(1, work_precision, rounding).div(&FBig::from_i64(2, work_precision, rounding));
    let one = FBig::from_i64(1, work_precision, rounding);
    let target_exponent = -(crate::round::working_bits(work_precision) as i64);

    for _ in 0..max_newton_iterations(work_precision) {
        let x2 = x.mul(&x);
        let inner = three.sub(&y_normalized.mul(&x2));
        let next = x.mul(&inner).mul(&half);
        let delta = next.div(&x).sub(&one);
        x = next;
        if delta.is_zero() || delta.exponent_raw() < target_exponent {
            break;
        }
    }

    let mut root = y_normalized.mul(&x);
    root.exponent += h;
    root.with_precision(y.precision).with_rounding(y.rounding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Rounding;

    fn p(s: &str) -> FBig {
        FBig::from_str_with(s, 50, Rounding::Nearest)
    }

    #[test]
    fn sqrt_of_four() {
        let v = p("4");
        let r = v.sqrt();
        assert!((r.to_f64() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn sqrt_of_two_squared_close_to_two() {
        // spec §8 scenario 3
        let two = p("2");
        let r = two.sqrt();
        let squared = &r * &r;
        let diff = (&squared - &two).abs();
        assert!(diff.to_f64().abs() < 1e-20);
    }

    #[test]
    fn sqrt_of_negative_is_nan() {
        let v = p("-4");
        assert!(v.sqrt().is_nan());
    }

    #[test]
    fn sqrt_of_zero_is_zero() {
        let z = FBig::zero(50, Rounding::Nearest, dashu_base::Sign::Positive);
        assert!(z.sqrt().is_zero());
    }
}
