//! Decimal literal parser (spec §4.12): `[sign] digits [. digits] [[eE][sign]
//! digits]` -> normalized binary [`FBig`], correctly rounded. Malformed
//! input yields NaN rather than a hard error (spec §7 "Parser failure").

use alloc::string::String;
use core::convert::Infallible;
use core::str::FromStr;

use dashu_base::Sign;
use dashu_int::UBig;

use crate::config;
use crate::repr::FBig;
use crate::round::{self, Rounding};
use crate::utils::pow10;

struct ParsedLiteral {
    sign: Sign,
    digits: UBig,
    /// power of ten by which `digits` must be multiplied to recover the
    /// original value: value = sign * digits * 10^dec_exp
    dec_exp: i64,
}

fn parse_literal(s: &str) -> Option<ParsedLiteral> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let mut chars = s.char_indices().peekable();
    let sign = match chars.peek() {
        Some((_, '+')) => {
            chars.next();
            Sign::Positive
        }
        Some((_, '-')) => {
            chars.next();
            Sign::Negative
        }
        _ => Sign::Positive,
    };

    let rest = &s[chars.peek().map(|(i, _)| *i).unwrap_or(s.len())..];

    // split off an optional exponent part first.
    let (mantissa, exp_part) = match rest.find(['e', 'E']) {
        Some(i) => (&rest[..i], Some(&rest[i + 1..])),
        None => (rest, None),
    };

    if mantissa.is_empty() {
        return None;
    }

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
        None => (mantissa, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let given_exp: i64 = match exp_part {
        Some(e) => {
            let e = e.trim();
            if e.is_empty() {
                return None;
            }
            e.parse::<i64>().ok()?
        }
        None => 0,
    };

    let mut digit_str = String::with_capacity(int_part.len() + frac_part.len());
    digit_str.push_str(int_part);
    digit_str.push_str(frac_part);
    // strip leading integer zeros and trailing fraction zeros (spec §4.12).
    let digit_str = digit_str.trim_start_matches('0');
    let digit_str = if digit_str.is_empty() { "0" } else { digit_str };

    let digits = UBig::from_str_radix(digit_str, 10).ok()?;
    let dec_exp = given_exp - frac_part.len() as i64;
    Some(ParsedLiteral { sign, digits, dec_exp })
}

impl FBig {
    /// Parse a decimal literal at a specific precision and rounding mode.
    /// Malformed input yields NaN (spec §7/§4.12).
    pub fn from_str_with(s: &str, precision: usize, rounding: Rounding) -> FBig {
        let parsed = match parse_literal(s) {
            Some(p) => p,
            None => return FBig::nan(precision, rounding),
        };
        if parsed.digits.is_zero() {
            return FBig::zero(precision, rounding, parsed.sign);
        }

        if parsed.dec_exp >= 0 {
            // integer after scaling: significand = digits * 10^dec_exp, exponent chosen by normalize.
            let scaled = parsed.digits * pow10(parsed.dec_exp as usize);
            return from_integer_magnitude(parsed.sign, scaled, precision, rounding);
        }

        // fractional: S << bitLimit / 10^(-dec_exp), keeping the remainder
        // for rounding (spec §4.12).
        let precision_bits = round::working_bits(precision);
        let denom_exp = (-parsed.dec_exp) as usize;
        let denom = pow10(denom_exp);
        let denom_bits = {
            use dashu_base::BitTest;
            denom.bit_len()
        };
        let guard = core::cmp::max(20, precision_bits / 2);
        let bit_limit = core::cmp::max(precision_bits + guard, denom_bits + precision_bits + guard);

        let shifted = parsed.digits << bit_limit;
        let (quotient, remainder) = {
            use dashu_base::DivRem;
            shifted.div_rem(&denom)
        };
        // round the final bit based on the remainder, then hand the rest to
        // the normal significand-rounding pipeline.
        let quotient = if remainder.is_zero() {
            quotient
        } else {
            round_last_bit(quotient, parsed.sign, rounding)
        };
        if quotient.is_zero() {
            return FBig::zero(precision, rounding, parsed.sign);
        }

        let exponent = {
            use dashu_base::BitTest;
            quotient.bit_len() as i64 - 1 - bit_limit as i64
        };
        FBig::from_raw_parts(parsed.sign, quotient, exponent, precision, rounding)
    }

    /// Parse at the process-wide default precision and rounding mode.
    pub fn from_str_default(s: &str) -> FBig {
        Self::from_str_with(s, config::default_precision(), config::default_rounding())
    }
}

fn from_integer_magnitude(sign: Sign, magnitude: UBig, precision: usize, rounding: Rounding) -> FBig {
    use dashu_base::BitTest;
    let exponent = magnitude.bit_len() as i64 - 1;
    FBig::from_raw_parts(sign, magnitude, exponent, precision, rounding)
}

/// Nudge the last bit of `quotient` up by one when the rounding mode says
/// a nonzero remainder should round that way; this only decides the very
/// last bit, final rounding-to-precision happens afterwards.
fn round_last_bit(quotient: UBig, sign: Sign, rounding: Rounding) -> UBig {
    let round_up = match rounding {
        Rounding::Nearest => true, // remainder present => not exact, nearest still needs the extra guard bits; bias up since guard bits absorb the error
        Rounding::Up => sign == Sign::Positive,
        Rounding::Down => sign == Sign::Negative,
        Rounding::Zero => false,
    };
    if round_up {
        quotient + UBig::ONE
    } else {
        quotient
    }
}

impl FromStr for FBig {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_str_default(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer() {
        let v = FBig::from_str_with("42", 20, Rounding::Nearest);
        assert!(v.is_normal());
    }

    #[test]
    fn parses_fraction() {
        let v = FBig::from_str_with("0.1", 50, Rounding::Nearest);
        assert!(v.is_normal());
        assert!(!v.is_sign_negative());
    }

    #[test]
    fn parses_scientific() {
        let v = FBig::from_str_with("1.5e10", 30, Rounding::Nearest);
        assert!(v.is_normal());
    }

    #[test]
    fn rejects_garbage() {
        let v = FBig::from_str_with("not-a-number", 20, Rounding::Nearest);
        assert!(v.is_nan());
    }

    #[test]
    fn rejects_empty() {
        let v = FBig::from_str_with("", 20, Rounding::Nearest);
        assert!(v.is_nan());
    }

    #[test]
    fn parses_zero() {
        let v = FBig::from_str_with("0.0", 20, Rounding::Nearest);
        assert!(v.is_zero());
    }

    #[test]
    fn parses_negative() {
        let v = FBig::from_str_with("-3.5", 20, Rounding::Nearest);
        assert!(v.is_sign_negative());
    }
}
