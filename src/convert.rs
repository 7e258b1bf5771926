//! Conversions to/from host types (spec §6): native `f64`, host big integer,
//! and the internal `f64` seeding helper used by the Newton iterations in
//! `div.rs`/`sqrt.rs`/`consts.rs`.

use core::convert::TryFrom;

use dashu_base::{BitTest, Sign};
use dashu_int::{IBig, UBig};

use crate::config;
use crate::error::{check_convertible, ConversionError};
use crate::repr::{FBig, Special};
use crate::round::{self, Rounding};

impl FBig {
    /// Construct from a native `f64` at a given precision/rounding. NaN and
    /// infinite inputs degrade gracefully into the matching special value
    /// (spec §7: "All other conversions degrade gracefully").
    pub fn from_f64(value: f64, precision: usize, rounding: Rounding) -> FBig {
        if value.is_nan() {
            return FBig::nan(precision, rounding);
        }
        if value.is_infinite() {
            let sign = if value.is_sign_negative() { Sign::Negative } else { Sign::Positive };
            return FBig::infinity(precision, rounding, sign);
        }
        if value == 0.0 {
            let sign = if value.is_sign_negative() { Sign::Negative } else { Sign::Positive };
            return FBig::zero(precision, rounding, sign);
        }

        let sign = if value.is_sign_negative() { Sign::Negative } else { Sign::Positive };
        let bits = value.to_bits();
        let raw_exponent = ((bits >> 52) & 0x7ff) as i64;
        let raw_mantissa = bits & 0xf_ffff_ffff_ffff;

        let (mantissa, exponent) = if raw_exponent == 0 {
            // subnormal
            (raw_mantissa, -1074i64)
        } else {
            (raw_mantissa | (1u64 << 52), raw_exponent - 1075)
        };

        if mantissa == 0 {
            return FBig::zero(precision, rounding, sign);
        }
        let trailing = mantissa.trailing_zeros() as i64;
        let mantissa = mantissa >> trailing;
        let exponent = exponent + trailing;

        let significand = UBig::from(mantissa);
        let bit_exponent = significand.bit_len() as i64 - 1 + exponent;
        FBig::from_raw_parts(sign, significand, bit_exponent, precision, rounding)
    }

    /// Construct from a native `f64` at the process-wide default
    /// precision/rounding.
    pub fn from_f64_default(value: f64) -> FBig {
        Self::from_f64(value, config::default_precision(), config::default_rounding())
    }

    /// Construct from a host signed big integer, exactly.
    pub fn from_ibig(value: IBig, precision: usize, rounding: Rounding) -> FBig {
        if value == IBig::ZERO {
            return FBig::zero(precision, rounding, Sign::Positive);
        }
        let sign = if value < IBig::ZERO { Sign::Negative } else { Sign::Positive };
        let magnitude = value.unsigned_abs();
        let exponent = magnitude.bit_len() as i64 - 1;
        FBig::from_raw_parts(sign, magnitude, exponent, precision, rounding)
    }

    /// Construct from a primitive integer.
    pub fn from_i64(value: i64, precision: usize, rounding: Rounding) -> FBig {
        Self::from_ibig(IBig::from(value), precision, rounding)
    }

    /// Convert to the nearest native `f64`, clamping to `±infinity` or
    /// `±0` at the edges instead of failing (spec §7).
    pub fn to_f64(&self) -> f64 {
        match self.special {
            Special::Nan => f64::NAN,
            Special::Infinite => {
                if self.sign == Sign::Negative { f64::NEG_INFINITY } else { f64::INFINITY }
            }
            Special::Zero => {
                if self.sign == Sign::Negative { -0.0 } else { 0.0 }
            }
            Special::Normal => {
                let (rounded, carry) = round::round_significand(self.significand.clone(), 53, self.sign, Rounding::Nearest);
                let exponent = self.exponent + carry - (rounded.bit_len() as i64 - 1);
                let mantissa_bits: u64 = u64::try_from(rounded).unwrap_or(u64::MAX);
                let magnitude = (mantissa_bits as f64) * exponent_scale(exponent);
                if magnitude.is_infinite() {
                    if self.sign == Sign::Negative { f64::NEG_INFINITY } else { f64::INFINITY }
                } else if self.sign == Sign::Negative {
                    -magnitude
                } else {
                    magnitude
                }
            }
        }
    }

    /// Convert to an exact host signed big integer. Fails for NaN/infinite
    /// values (spec §7, the one out-of-band error path). Finite non-integer
    /// values are truncated toward zero.
    pub fn to_ibig(&self) -> Result<IBig, ConversionError> {
        check_convertible(self)?;
        if self.special == Special::Zero {
            return Ok(IBig::ZERO);
        }
        let frac_bits = self.bit_len() as i64 - 1 - self.exponent;
        let magnitude = if frac_bits <= 0 {
            &self.significand << (-frac_bits) as usize
        } else {
            &self.significand >> frac_bits as usize
        };
        let signed = IBig::from(magnitude);
        Ok(if self.sign == Sign::Negative { -signed } else { signed })
    }

    /// A rough `f64` estimate of the value ignoring precision/rounding,
    /// used only to seed Newton iterations (spec §4.5/§4.6: "seed `u = 1 /
    /// toHostFloat(v_normalized)`"). Never exposed publicly; callers that
    /// want a faithfully-rounded `f64` should use [`Self::to_f64`].
    pub(crate) fn seed_f64(&self) -> f64 {
        self.to_f64()
    }
}

fn exponent_scale(exponent: i64) -> f64 {
    if exponent >= 0 {
        2f64.powi(exponent.min(1023) as i32)
    } else {
        2f64.powi(exponent.max(-1074) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_round_trip_small() {
        let v = FBig::from_f64(1.5, 50, Rounding::Nearest);
        assert!((v.to_f64() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn f64_zero_sign_preserved() {
        let v = FBig::from_f64(-0.0, 50, Rounding::Nearest);
        assert!(v.is_zero());
        assert!(v.is_sign_negative());
    }

    #[test]
    fn ibig_conversion_rejects_nan() {
        let nan = FBig::nan(50, Rounding::Nearest);
        assert_eq!(nan.to_ibig(), Err(ConversionError::NotANumber));
    }

    #[test]
    fn ibig_conversion_rejects_infinite() {
        let inf = FBig::infinity(50, Rounding::Nearest, Sign::Positive);
        assert_eq!(inf.to_ibig(), Err(ConversionError::Infinite));
    }

    #[test]
    fn ibig_round_trips_integers() {
        let v = FBig::from_i64(12345, 50, Rounding::Nearest);
        assert_eq!(v.to_ibig().unwrap(), IBig::from(12345));
    }
}
