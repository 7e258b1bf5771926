//! Rounding modes and the normalize/round-to-precision routine (spec §4.1,
//! §4.2).

use dashu_base::Sign;
use dashu_int::UBig;

/// One of the four IEEE-754-style rounding modes a value carries (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rounding {
    /// Round to the nearest representable value. Ties round away from zero
    /// on the first dropped bit (spec §4.1's literal rule, Open Question 1
    /// in spec §9 resolved in favor of the documented behavior rather than
    /// banker's rounding — see DESIGN.md).
    Nearest = 0,
    /// Round toward +infinity.
    Up = 1,
    /// Round toward -infinity.
    Down = 2,
    /// Round toward zero (truncate).
    Zero = 3,
}

impl Rounding {
    pub(crate) fn from_u8(v: u8) -> Self {
        match v {
            0 => Rounding::Nearest,
            1 => Rounding::Up,
            2 => Rounding::Down,
            3 => Rounding::Zero,
            _ => unreachable!("invalid encoded rounding mode"),
        }
    }
}

/// Binary working width `W = ceil((precision + 1) * log2(10))` for a given
/// decimal `precision` (spec §3).
#[inline]
pub fn working_bits(precision: usize) -> usize {
    // log2(10) ~= 3.32192809488736...; use a rational over-approximation
    // (332193 / 100000) so the ceiling is always at least as large as the
    // exact value, never smaller.
    let num = (precision as u128 + 1) * 332_193;
    let bits = (num + 99_999) / 100_000;
    bits as usize
}

/// Round a non-negative `significand` with bit length `b = significand.bit_len()`
/// down to at most `target_bits` bits, per spec §4.1.
///
/// Returns the rounded significand and the exponent adjustment that must be
/// *added* to the pre-rounding exponent (0, or 1 if rounding carried the bit
/// length past `target_bits`).
pub(crate) fn round_significand(
    significand: UBig,
    target_bits: usize,
    sign: Sign,
    rounding: Rounding,
) -> (UBig, i64) {
    use dashu_base::BitTest;

    let b = significand.bit_len();
    if b <= target_bits {
        return (significand, 0);
    }
    let d = b - target_bits;
    let divisor = UBig::ONE << d;
    let dropped = &significand & (&divisor - UBig::ONE);
    let mut shifted = significand >> d;

    let round_up = match rounding {
        Rounding::Nearest => {
            let halfway = UBig::ONE << (d - 1);
            if dropped > halfway {
                true
            } else if dropped < halfway {
                false
            } else {
                // exact tie: round-half-up per the spec's literal rule.
                true
            }
        }
        Rounding::Up => sign == Sign::Positive && !dropped.is_zero(),
        Rounding::Down => sign == Sign::Negative && !dropped.is_zero(),
        Rounding::Zero => false,
    };

    if round_up {
        shifted += UBig::ONE;
        if shifted.bit_len() > target_bits {
            // carry grew the bit length by one; shift back down.
            shifted >>= 1;
            return (shifted, 1);
        }
    }
    (shifted, 0)
}

/// Strict banker's-rounding variant of [`round_significand`], used only by
/// the dedicated rounding-property test (spec §4.1's "allowable refinement").
#[cfg(test)]
pub(crate) fn round_significand_ties_to_even(
    significand: UBig,
    target_bits: usize,
) -> (UBig, i64) {
    use dashu_base::BitTest;

    let b = significand.bit_len();
    if b <= target_bits {
        return (significand, 0);
    }
    let d = b - target_bits;
    let divisor = UBig::ONE << d;
    let dropped = &significand & (&divisor - UBig::ONE);
    let mut shifted = significand >> d;
    let halfway = UBig::ONE << (d - 1);

    let round_up = if dropped > halfway {
        true
    } else if dropped < halfway {
        false
    } else {
        // exact tie: round to even.
        (&shifted & UBig::ONE) == UBig::ONE
    };

    if round_up {
        shifted += UBig::ONE;
        if shifted.bit_len() > target_bits {
            shifted >>= 1;
            return (shifted, 1);
        }
    }
    (shifted, 0)
}
