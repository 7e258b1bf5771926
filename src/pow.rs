//! `pow(x, y)` (spec §4.10): integer fast paths (pure-power-of-two shortcut,
//! binary exponentiation by squaring) and the general `exp(y * ln x)` path
//! for non-integer exponents, with the special-case zoo spelled out in the
//! spec.

use dashu_base::Sign;
use dashu_int::UBig;

use crate::repr::FBig;
use crate::round::Rounding;

impl FBig {
    pub fn pow(&self, y: &FBig) -> Self {
        let precision = self.precision.max(y.precision);
        let rounding = self.rounding;

        if self.is_nan() || y.is_nan() {
            return FBig::nan(precision, rounding);
        }

        if self.is_zero() && y.is_zero() {
            return FBig::nan(precision, rounding);
        }

        if y.is_zero() {
            return FBig::from_i64(1, precision, rounding);
        }

        if y.is_infinite() {
            return pow_infinite_exponent(self, y, precision, rounding);
        }

        if self.is_infinite() {
            return pow_infinite_base(self, y, precision, rounding);
        }

        if self.is_zero() {
            if y.sign == Sign::Negative {
                return FBig::infinity(precision, rounding, Sign::Positive);
            }
            return FBig::zero(precision, rounding, Sign::Positive);
        }

        if is_one(self) {
            return FBig::from_i64(1, precision, rounding);
        }

        if y.trunc().equal(y) {
            return pow_integer(self, y, precision, rounding);
        }

        // non-integer exponent: requires a strictly positive base.
        if self.sign == Sign::Negative {
            return FBig::nan(precision, rounding);
        }
        let log = self.clone().with_precision(precision).ln();
        y.clone().with_precision(precision).mul(&log).exp().with_precision(precision).with_rounding(rounding)
    }
}

fn is_one(x: &FBig) -> bool {
    x.is_normal() && x.significand() == &UBig::ONE && x.exponent_raw() == 0 && x.sign == Sign::Positive
}

fn pow_infinite_exponent(x: &FBig, y: &FBig, precision: usize, rounding: Rounding) -> FBig {
    let magnitude = x.abs();
    let one = FBig::from_i64(1, precision, rounding);
    let grows = magnitude.greater(&one);
    let shrinks = magnitude.less(&one);
    let y_positive = y.sign == Sign::Positive;

    if magnitude.equal(&one) {
        return FBig::from_i64(1, precision, rounding);
    }
    if (grows && y_positive) || (shrinks && !y_positive) {
        FBig::infinity(precision, rounding, Sign::Positive)
    } else {
        FBig::zero(precision, rounding, Sign::Positive)
    }
}

fn pow_infinite_base(x: &FBig, y: &FBig, precision: usize, rounding: Rounding) -> FBig {
    let y_positive = y.sign == Sign::Positive;
    let y_is_integer = y.trunc().equal(y);
    let sign = if x.sign == Sign::Negative && y_is_integer && is_odd_integer(y) {
        Sign::Negative
    } else {
        Sign::Positive
    };
    if y_positive {
        FBig::infinity(precision, rounding, sign)
    } else {
        FBig::zero(precision, rounding, Sign::Positive)
    }
}

fn is_odd_integer(y: &FBig) -> bool {
    match y.to_ibig() {
        Ok(n) => (&n % dashu_int::IBig::from(2)) != dashu_int::IBig::ZERO,
        Err(_) => false,
    }
}

/// Integer exponent fast paths (spec §4.10): pure-power-of-two shortcut,
/// else binary exponentiation by squaring.
fn pow_integer(x: &FBig, y: &FBig, precision: usize, rounding: Rounding) -> FBig {
    let y_int = match y.to_ibig() {
        Ok(n) => n,
        Err(_) => return FBig::nan(precision, rounding),
    };
    if y_int == dashu_int::IBig::ZERO {
        return FBig::from_i64(1, precision, rounding);
    }

    if x.significand() == &UBig::ONE {
        let y_i64: i64 = i64::try_from(y_int.clone()).unwrap_or(if y_int.sign() == Sign::Negative { i64::MIN } else { i64::MAX });
        let exponent = x.exponent_raw() * y_i64;
        let sign = if x.sign == Sign::Negative && is_odd_integer(y) { Sign::Negative } else { Sign::Positive };
        return FBig::from_raw_parts(sign, UBig::ONE, exponent, precision, rounding);
    }

    let negative_exponent = y_int.sign() == Sign::Negative;
    let mut exp_mag = y_int.unsigned_abs();
    let mut base = x.clone().with_precision(precision).with_rounding(rounding);
    let mut result = FBig::from_i64(1, precision, rounding);

    while exp_mag != UBig::ZERO {
        if (&exp_mag % UBig::from(2u8)) == UBig::ONE {
            result = result.mul(&base);
        }
        base = base.mul(&base);
        exp_mag >>= 1;
    }

    if negative_exponent {
        FBig::from_i64(1, precision, rounding).div(&result)
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Rounding;

    fn p(s: &str) -> FBig {
        FBig::from_str_with(s, 30, Rounding::Nearest)
    }

    #[test]
    fn pow_integer_exponent() {
        let v = p("2").pow(&p("10"));
        assert!((v.to_f64() - 1024.0).abs() < 1e-6);
    }

    #[test]
    fn pow_negative_integer_exponent() {
        let v = p("2").pow(&p("-2"));
        assert!((v.to_f64() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn pow_zero_exponent_is_one() {
        let v = p("5").pow(&p("0"));
        assert!((v.to_f64() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pow_zero_base_zero_exponent_is_nan() {
        let z = FBig::zero(30, Rounding::Nearest, dashu_base::Sign::Positive);
        let v = z.pow(&z);
        assert!(v.is_nan());
    }

    #[test]
    fn pow_fractional_exponent() {
        let v = p("4").pow(&p("0.5"));
        assert!((v.to_f64() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn pow_negative_base_fractional_exponent_is_nan() {
        let v = p("-4").pow(&p("0.5"));
        assert!(v.is_nan());
    }
}
