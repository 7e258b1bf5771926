//! Rounding to integer and the small integer-op family: `floor`, `ceil`,
//! `trunc`, `round`, `fmod`, `modf`, `frexp`, `ldexp`, `nextafter`, `succ`,
//! `pred` (spec §4.14). These were stubbed `unimplemented!()` in the
//! teacher's `fbig.rs` (`ulp`/`ceil`/`floor`/`trunc`/`fract`); bodies here
//! are written from the spec.

use dashu_base::Sign;
use dashu_int::UBig;

use crate::repr::{FBig, Special};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundToInt {
    Floor,
    Ceil,
    Trunc,
    /// Round half away from zero.
    Nearest,
}

impl FBig {
    fn round_to_integer(&self, mode: RoundToInt) -> Self {
        if !self.is_normal() {
            return self.clone();
        }
        let bitlen = self.bit_len() as i64;
        let frac_bits = bitlen - 1 - self.exponent;
        if frac_bits <= 0 {
            // already an integer; just re-normalize through fresh construction.
            return FBig::from_raw_parts(self.sign, self.significand.clone(), self.exponent, self.precision, self.rounding);
        }
        let frac_bits = frac_bits as usize;
        let int_part = &self.significand >> frac_bits;
        let frac_part = &self.significand & &((UBig::ONE << frac_bits) - UBig::ONE);

        let round_up_magnitude = match mode {
            RoundToInt::Trunc => false,
            RoundToInt::Floor => self.sign == Sign::Negative && !frac_part.is_zero(),
            RoundToInt::Ceil => self.sign == Sign::Positive && !frac_part.is_zero(),
            RoundToInt::Nearest => {
                let half = UBig::ONE << (frac_bits - 1);
                frac_part >= half
            }
        };

        let int_part = if round_up_magnitude { int_part + UBig::ONE } else { int_part };
        if int_part.is_zero() {
            return FBig::zero(self.precision, self.rounding, Sign::Positive);
        }
        use dashu_base::BitTest;
        let exponent = int_part.bit_len() as i64 - 1;
        FBig::from_raw_parts(self.sign, int_part, exponent, self.precision, self.rounding)
    }

    pub fn floor(&self) -> Self {
        self.round_to_integer(RoundToInt::Floor)
    }

    pub fn ceil(&self) -> Self {
        self.round_to_integer(RoundToInt::Ceil)
    }

    pub fn trunc(&self) -> Self {
        self.round_to_integer(RoundToInt::Trunc)
    }

    pub fn round(&self) -> Self {
        self.round_to_integer(RoundToInt::Nearest)
    }

    pub fn fmod(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() || other.is_zero() || self.is_infinite() {
            return FBig::nan(self.precision.max(other.precision), self.rounding);
        }
        if other.is_infinite() {
            return self.clone();
        }
        let q = self.div(other).trunc();
        self.sub(&q.mul(other))
    }

    pub fn modf(&self) -> (Self, Self) {
        let int_part = self.trunc();
        let frac_part = self.sub(&int_part);
        (int_part, frac_part)
    }

    /// `(mantissa, exponent)` with `0.5 <= |mantissa| < 1`, such that
    /// `self == mantissa * 2^exponent`. Because the internal significand is
    /// already normalized with the hidden bit as the units digit, this only
    /// needs to reinterpret the stored exponent (spec §4.14).
    pub fn frexp(&self) -> (Self, i64) {
        if !self.is_normal() {
            return (self.clone(), 0);
        }
        let mantissa = FBig::new_normal(self.sign, self.significand.clone(), -1, self.precision, self.rounding);
        (mantissa, self.exponent + 1)
    }

    /// `x * 2^n`.
    pub fn ldexp(&self, n: i64) -> Self {
        match self.special {
            Special::Normal => {
                let mut r = self.clone();
                r.exponent += n;
                r
            }
            _ => self.clone(),
        }
    }

    /// The unit in the last place at `self`'s decimal precision, as a
    /// positive [`FBig`] (spec §4.14, GLOSSARY "ULP").
    pub fn ulp(&self) -> Self {
        let exponent = -(ulp_exponent(self.precision) as i64);
        FBig::new_normal(Sign::Positive, UBig::ONE, exponent, self.precision, self.rounding)
    }

    /// The next representable value after `self`, moving toward +infinity.
    pub fn succ(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }
        if self.is_zero() {
            return self.ulp();
        }
        self.add(&self.ulp())
    }

    /// The next representable value after `self`, moving toward -infinity.
    pub fn pred(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }
        if self.is_zero() {
            return self.ulp().neg();
        }
        self.sub(&self.ulp())
    }

    /// Advance `self` by one ULP in the direction of `other` (spec §4.14).
    pub fn nextafter(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return FBig::nan(self.precision, self.rounding);
        }
        if self.equal(other) {
            return self.clone();
        }
        if self.less(other) {
            self.succ()
        } else {
            self.pred()
        }
    }
}

fn ulp_exponent(precision: usize) -> usize {
    // ceil(precision * log2(10)), distinct from `working_bits` (which adds
    // one to `precision` first) per spec §4.14's literal ULP formula.
    let num = precision as u128 * 332_193;
    let bits = (num + 99_999) / 100_000;
    bits as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Rounding;

    fn p(s: &str) -> FBig {
        FBig::from_str_with(s, 30, Rounding::Nearest)
    }

    #[test]
    fn floor_ceil_trunc_round() {
        let v = p("2.7");
        assert!((v.floor().to_f64() - 2.0).abs() < 1e-9);
        assert!((v.ceil().to_f64() - 3.0).abs() < 1e-9);
        assert!((v.trunc().to_f64() - 2.0).abs() < 1e-9);
        assert!((v.round().to_f64() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn negative_floor_ceil() {
        let v = p("-2.7");
        assert!((v.floor().to_f64() - (-3.0)).abs() < 1e-9);
        assert!((v.ceil().to_f64() - (-2.0)).abs() < 1e-9);
    }

    #[test]
    fn modf_sums_back() {
        let v = p("5.25");
        let (i, f) = v.modf();
        let sum = i.add(&f);
        assert!((sum.to_f64() - 5.25).abs() < 1e-9);
    }

    #[test]
    fn frexp_ldexp_roundtrip() {
        let v = p("12.5");
        let (m, e) = v.frexp();
        let back = m.ldexp(e);
        assert!((back.to_f64() - v.to_f64()).abs() < 1e-9);
        assert!(m.to_f64().abs() < 1.0 && m.to_f64().abs() >= 0.5);
    }

    #[test]
    fn nextafter_moves_toward_target() {
        let a = p("1");
        let b = p("2");
        let n = a.nextafter(&b);
        assert!(a.less(&n));
    }
}
