//! The number record itself (spec §3): sign, significand, exponent,
//! precision, rounding mode, special-value tag, and the bit-length cache.
//!
//! Field layout and the `ZERO`/`ONE`/`INFINITY` const constructors follow
//! the teacher's `float/src/fbig.rs::FBig`; unlike the teacher, `precision`
//! and `rounding` are plain fields on the value rather than a separate
//! `Context<R>` type parameter (see DESIGN.md "Structural deviation").

use core::cell::Cell;
use core::cmp::Ordering;

use dashu_base::{BitTest, Sign};
use dashu_int::UBig;

use crate::config;
use crate::round::{self, Rounding};

/// Which of the four special states (spec §3) a value is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    Normal,
    Zero,
    Infinite,
    Nan,
}

/// An arbitrary precision binary floating point number: `sign * significand
/// * 2^(exponent - bitlen + 1)`.
///
/// `significand` is always non-negative (spec §3 invariant 1); the sign is
/// carried separately so that a `Zero` or `Nan` can still record a sign bit
/// without a zero significand being ambiguous.
#[derive(Clone, Debug)]
pub struct FBig {
    pub(crate) sign: Sign,
    pub(crate) significand: UBig,
    pub(crate) exponent: i64,
    pub(crate) precision: usize,
    pub(crate) rounding: Rounding,
    pub(crate) special: Special,
    pub(crate) bitlen_cache: Cell<Option<usize>>,
}

impl FBig {
    /// Build a `Normal` value from already-normalized parts. Internal use
    /// only — callers that might carry extra bits should go through
    /// [`Self::from_raw_parts`] instead, which rounds to precision.
    pub(crate) fn new_normal(
        sign: Sign,
        significand: UBig,
        exponent: i64,
        precision: usize,
        rounding: Rounding,
    ) -> Self {
        debug_assert!(!significand.is_zero());
        FBig {
            sign,
            significand,
            exponent,
            precision,
            rounding,
            special: Special::Normal,
            bitlen_cache: Cell::new(None),
        }
    }

    pub(crate) fn new_special(sign: Sign, special: Special, precision: usize, rounding: Rounding) -> Self {
        FBig {
            sign,
            significand: UBig::ZERO,
            exponent: 0,
            precision,
            rounding,
            special,
            bitlen_cache: Cell::new(Some(0)),
        }
    }

    /// Construct from raw (possibly over-wide) parts and round to `precision`
    /// decimal digits (spec §4.1). This is the single choke point every
    /// arithmetic operation funnels its result through.
    pub(crate) fn from_raw_parts(
        sign: Sign,
        significand: UBig,
        exponent: i64,
        precision: usize,
        rounding: Rounding,
    ) -> Self {
        if significand.is_zero() {
            return Self::zero(precision, rounding, Sign::Positive);
        }
        let target_bits = round::working_bits(precision);
        let (rounded, carry) = round::round_significand(significand, target_bits, sign, rounding);
        if rounded.is_zero() {
            return Self::zero(precision, rounding, Sign::Positive);
        }
        Self::new_normal(sign, rounded, exponent + carry, precision, rounding)
    }

    // ---- sentinels ----

    pub fn zero(precision: usize, rounding: Rounding, sign: Sign) -> Self {
        Self::new_special(sign, Special::Zero, precision, rounding)
    }

    pub fn infinity(precision: usize, rounding: Rounding, sign: Sign) -> Self {
        Self::new_special(sign, Special::Infinite, precision, rounding)
    }

    pub fn nan(precision: usize, rounding: Rounding) -> Self {
        // NaN is returned with sign = +1 by convention (spec §3).
        Self::new_special(Sign::Positive, Special::Nan, precision, rounding)
    }

    /// Zero at the process-wide default precision and rounding mode.
    pub fn default_zero() -> Self {
        Self::zero(config::default_precision(), config::default_rounding(), Sign::Positive)
    }

    // ---- accessors ----

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    pub fn precision(&self) -> usize {
        self.precision
    }

    #[inline]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    #[inline]
    pub fn special(&self) -> Special {
        self.special
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.special == Special::Nan
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.special == Special::Infinite
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.special == Special::Zero
    }

    #[inline]
    pub fn is_normal(&self) -> bool {
        self.special == Special::Normal
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self.special, Special::Normal | Special::Zero)
    }

    pub(crate) fn significand(&self) -> &UBig {
        &self.significand
    }

    pub(crate) fn exponent_raw(&self) -> i64 {
        self.exponent
    }

    /// Bit length of the significand, using and maintaining the cache
    /// (spec §4.2). `0` for special values.
    pub(crate) fn bit_len(&self) -> usize {
        if let Some(b) = self.bitlen_cache.get() {
            return b;
        }
        let b = if self.special == Special::Normal {
            self.significand.bit_len()
        } else {
            0
        };
        self.bitlen_cache.set(Some(b));
        b
    }

    /// The binary exponent of the significand's least-significant bit:
    /// `exponent - bitlen + 1` (used throughout §4.3/§4.13 for alignment).
    pub(crate) fn effective_lsb_exponent(&self) -> i64 {
        self.exponent - self.bit_len() as i64 + 1
    }

    /// `sign * significand` as a signed magnitude comparison key, used by
    /// total ordering in `cmp.rs`.
    pub(crate) fn magnitude_cmp(&self, other: &Self) -> Ordering {
        let se = self.effective_lsb_exponent();
        let oe = other.effective_lsb_exponent();
        let common = se.min(oe);
        let a = &self.significand << (se - common) as usize;
        let b = &other.significand << (oe - common) as usize;
        a.cmp(&b)
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        if self.special != Special::Normal {
            self.precision = precision;
            return self;
        }
        let target_bits = round::working_bits(precision);
        if self.bit_len() <= target_bits {
            self.precision = precision;
            return self;
        }
        let (sig, carry) = round::round_significand(self.significand, target_bits, self.sign, self.rounding);
        Self::from_raw_parts(self.sign, sig, self.exponent + carry, precision, self.rounding)
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn neg(&self) -> Self {
        let sign = -self.sign;
        match self.special {
            Special::Normal => Self::new_normal(sign, self.significand.clone(), self.exponent, self.precision, self.rounding),
            // Open Question 2 (DESIGN.md): negation of a signed zero is
            // observable, unlike a freshly *constructed* zero.
            Special::Zero => Self::zero(self.precision, self.rounding, sign),
            Special::Infinite => Self::infinity(self.precision, self.rounding, sign),
            Special::Nan => self.clone(),
        }
    }

    pub fn abs(&self) -> Self {
        if self.sign == Sign::Negative {
            self.neg()
        } else {
            self.clone()
        }
    }
}

impl Default for FBig {
    /// Default value: +0 at the process-wide default precision/rounding.
    fn default() -> Self {
        Self::default_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariants_on_zero() {
        let z = FBig::zero(10, Rounding::Nearest, Sign::Positive);
        assert!(z.is_zero());
        assert_eq!(z.significand(), &UBig::ZERO);
    }

    #[test]
    fn nan_is_always_positive() {
        let n = FBig::nan(10, Rounding::Nearest);
        assert_eq!(n.sign(), Sign::Positive);
    }

    #[test]
    fn neg_zero_is_observable() {
        let z = FBig::zero(10, Rounding::Nearest, Sign::Positive);
        let nz = z.neg();
        assert!(nz.is_zero());
        assert!(nz.is_sign_negative());
    }
}
