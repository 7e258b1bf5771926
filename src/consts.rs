//! Mathematical constants via binary splitting (spec §4.7): pi (Chudnovsky),
//! e, ln2/ln5/ln10 (acoth series, matching the teacher's `log.rs::ln2`/`ln10`
//! formulas but accumulated by binary splitting instead of a running Taylor
//! loop), sqrt(2), and epsilon.

use dashu_int::IBig;

use crate::repr::FBig;
use crate::round::Rounding;

/// Binary-split accumulator for `e = sum_{k=0}^n 1/k!`.
///
/// `bs(a, b)` returns `(P, Q)` with `P/Q = sum_{k=a+1}^{b} 1/k!`, following
/// spec §4.7's `a+1==b` atomic-term / `a+1<b` combine-at-midpoint recursion
/// (specialized: this series needs no `R` accumulator).
fn bs_factorial(a: u64, b: u64) -> (IBig, IBig) {
    if a + 1 == b {
        (IBig::ONE, IBig::from(b))
    } else {
        let m = (a + b) / 2;
        let (pl, ql) = bs_factorial(a, m);
        let (pr, qr) = bs_factorial(m, b);
        (&pl * &qr + &pr, ql * qr)
    }
}

/// Term count so the tail of `sum 1/k!` is below the working precision,
/// via the Stirling-bound Newton iteration described in spec §4.7:
/// `k(ln k - 1) + 1/2 ln(2*pi*k) = (precision+1) * ln 10`.
fn e_term_count(precision: usize) -> u64 {
    let target = (precision as f64 + 1.0) * core::f64::consts::LN_10;
    let mut k = (precision as f64 * 2.0).max(4.0);
    for _ in 0..50 {
        let f = k * (k.ln() - 1.0) + 0.5 * (2.0 * core::f64::consts::PI * k).ln() - target;
        let fp = k.ln(); // d/dk [k ln k - k] = ln k
        if fp.abs() < 1e-12 {
            break;
        }
        let next = k - f / fp;
        if (next - k).abs() < 0.5 {
            k = next;
            break;
        }
        k = next.max(4.0);
    }
    k.ceil() as u64 + 4
}

/// `e` at the given decimal precision.
pub fn e(precision: usize, rounding: Rounding) -> FBig {
    let guard = crate::div::guard_digits(precision);
    let work_precision = precision + guard;
    let n = e_term_count(work_precision);
    let (p, q) = bs_factorial(0, n);
    let series = FBig::from_ibig(p, work_precision, rounding).div(&FBig::from_ibig(q, work_precision, rounding));
    FBig::from_i64(1, work_precision, rounding)
        .add(&series)
        .with_precision(precision)
        .with_rounding(rounding)
}

const CHUDNOVSKY_C3_OVER_24: i128 = 10_939_058_860_032_000;
const CHUDNOVSKY_A: i64 = 13_591_409;
const CHUDNOVSKY_B: i64 = 545_140_134;

/// Chudnovsky binary splitting, following spec §4.7's recursion: `split(a,
/// b) -> (P, Q, R)`, atomic at `a+1==b`, combined at the midpoint as `P =
/// P_l*P_r`, `Q = Q_l*Q_r`, `R = Q_r*R_l + P_l*R_r` — `R` is the running
/// sum of the series (term `k`'s contribution scaled by `P_l`), not a
/// plain product: each term's numerator carries the `(A + B*k)` linear
/// factor the series actually sums.
fn chudnovsky_split(a: u64, b: u64) -> (IBig, IBig, IBig) {
    if a + 1 == b {
        if a == 0 {
            return (IBig::ONE, IBig::ONE, IBig::from(CHUDNOVSKY_A));
        }
        let ak = a as i128;
        let mut p_term = (6 * ak - 5) * (2 * ak - 1) * (6 * ak - 1);
        if a % 2 == 1 {
            p_term = -p_term;
        }
        let q_term = CHUDNOVSKY_C3_OVER_24 * ak * ak * ak;
        let r_term = p_term * (CHUDNOVSKY_A as i128 + CHUDNOVSKY_B as i128 * ak);
        (IBig::from(p_term), IBig::from(q_term), IBig::from(r_term))
    } else {
        let m = (a + b) / 2;
        let (pl, ql, rl) = chudnovsky_split(a, m);
        let (pr, qr, rr) = chudnovsky_split(m, b);
        let r = &qr * &rl + &pl * &rr;
        let p = pl * pr;
        let q = ql * qr;
        (p, q, r)
    }
}

/// Term count for Chudnovsky's series: `ceil(precision * ln10 /
/// ln(151931373056000))` (spec §4.7).
fn pi_term_count(precision: usize) -> u64 {
    const LN_151931373056000: f64 = 32.964_193_009_661_88; // ln(640320^3 / 24 * ... ) per-term convergence constant
    let k = (precision as f64) * core::f64::consts::LN_10 / LN_151931373056000;
    k.ceil() as u64 + 2
}

/// Pi via Chudnovsky's series and binary splitting (spec §4.7).
pub fn pi(precision: usize, rounding: Rounding) -> FBig {
    let guard = crate::div::guard_digits(precision);
    let work_precision = precision + guard;
    let n = pi_term_count(work_precision).max(1);
    let (_p, q, r) = chudnovsky_split(0, n);

    let ten_thousand_five = FBig::from_i64(10005, work_precision, rounding);
    let sqrt10005 = ten_thousand_five.sqrt();
    let numerator = FBig::from_ibig(q, work_precision, rounding).mul(&FBig::from_i64(426_880, work_precision, rounding)).mul(&sqrt10005);
    let denominator = FBig::from_ibig(r, work_precision, rounding);
    numerator.div(&denominator).with_precision(precision).with_rounding(rounding)
}

/// Binary-split accumulator for `acoth(n) = sum_{i>=0} 1/(n^(2i+1)(2i+1))`
/// (Zúñiga's scheme, matching the teacher's `log.rs::iacoth` formula but
/// accumulated via binary splitting rather than a running Taylor loop).
/// `bs(a, b)` returns `(P, Q)` with `P/Q = sum_{i=a}^{b-1} 1/(n^(2i+1)(2i+1))`.
fn bs_acoth(n: &IBig, a: u64, b: u64) -> (IBig, IBig) {
    if a + 1 == b {
        let exponent = 2 * a + 1;
        let denom_pow = ibig_pow(n, exponent);
        (IBig::ONE, denom_pow * IBig::from(exponent))
    } else {
        let m = (a + b) / 2;
        let (pl, ql) = bs_acoth(n, a, m);
        let (pr, qr) = bs_acoth(n, m, b);
        (&pl * &qr + &pr * &ql, ql * qr)
    }
}

fn ibig_pow(base: &IBig, exp: u64) -> IBig {
    let mut result = IBig::ONE;
    let mut b = base.clone();
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = &result * &b;
        }
        b = &b * &b;
        e >>= 1;
    }
    result
}

fn acoth(n: i64, precision: usize, rounding: Rounding) -> FBig {
    // term count so that n^(2k+1) exceeds 10^precision, plus guard.
    let terms = ((precision as f64) / (n as f64).log10()).ceil() as u64 + 4;
    let (p, q) = bs_acoth(&IBig::from(n), 0, terms);
    FBig::from_ibig(p, precision, rounding).div(&FBig::from_ibig(q, precision, rounding))
}

/// `ln 2` at the given decimal precision, via `log(2) = 4*acoth(6) +
/// 2*acoth(99)` (Gourdon & Sebah, reused verbatim from the teacher's
/// `log.rs::ln2`).
pub fn ln2(precision: usize, rounding: Rounding) -> FBig {
    let guard = crate::div::guard_digits(precision);
    let work_precision = precision + guard;
    let four = FBig::from_i64(4, work_precision, rounding);
    let two = FBig::from_i64(2, work_precision, rounding);
    let t1 = four.mul(&acoth(6, work_precision, rounding));
    let t2 = two.mul(&acoth(99, work_precision, rounding));
    t1.add(&t2).with_precision(precision).with_rounding(rounding)
}

/// `ln 10` at the given decimal precision, via `log(10) = 3*log(2) +
/// 2*acoth(9)` (reused verbatim from the teacher's `log.rs::ln10`).
pub fn ln10(precision: usize, rounding: Rounding) -> FBig {
    let guard = crate::div::guard_digits(precision);
    let work_precision = precision + guard;
    let three = FBig::from_i64(3, work_precision, rounding);
    let two = FBig::from_i64(2, work_precision, rounding);
    let t1 = three.mul(&ln2(work_precision, rounding));
    let t2 = two.mul(&acoth(9, work_precision, rounding));
    t1.add(&t2).with_precision(precision).with_rounding(rounding)
}

/// `ln 5 = ln 10 - ln 2` (spec §4.7: "ln 10 is synthesized as ln 2 + ln 5",
/// inverted here since `ln2`/`ln10` are the two directly computed series).
pub fn ln5(precision: usize, rounding: Rounding) -> FBig {
    let guard = crate::div::guard_digits(precision);
    let work_precision = precision + guard;
    ln10(work_precision, rounding)
        .sub(&ln2(work_precision, rounding))
        .with_precision(precision)
        .with_rounding(rounding)
}

/// `sqrt(2)` at the given decimal precision.
pub fn sqrt2(precision: usize, rounding: Rounding) -> FBig {
    FBig::from_i64(2, precision, rounding).sqrt()
}

/// Machine epsilon at precision `p`: `10^-p`, computed as `1 / 10^p`
/// (spec §4.7).
pub fn epsilon(precision: usize, rounding: Rounding) -> FBig {
    let ten = FBig::from_i64(10, precision, rounding);
    let mut pow = FBig::from_i64(1, precision, rounding);
    for _ in 0..precision {
        pow = pow.mul(&ten);
    }
    FBig::from_i64(1, precision, rounding).div(&pow)
}

impl FBig {
    pub fn pi_const(precision: usize, rounding: Rounding) -> Self {
        pi(precision, rounding)
    }
    pub fn e_const(precision: usize, rounding: Rounding) -> Self {
        e(precision, rounding)
    }
    pub fn ln2_const(precision: usize, rounding: Rounding) -> Self {
        ln2(precision, rounding)
    }
    pub fn ln5_const(precision: usize, rounding: Rounding) -> Self {
        ln5(precision, rounding)
    }
    pub fn ln10_const(precision: usize, rounding: Rounding) -> Self {
        ln10(precision, rounding)
    }
    pub fn sqrt2_const(precision: usize, rounding: Rounding) -> Self {
        sqrt2(precision, rounding)
    }
    pub fn epsilon_const(precision: usize, rounding: Rounding) -> Self {
        epsilon(precision, rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e_is_about_2_718() {
        let v = e(20, Rounding::Nearest);
        assert!((v.to_f64() - core::f64::consts::E).abs() < 1e-9);
    }

    #[test]
    fn pi_is_about_3_14159() {
        let v = pi(20, Rounding::Nearest);
        assert!((v.to_f64() - core::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn ln2_matches_f64() {
        let v = ln2(20, Rounding::Nearest);
        assert!((v.to_f64() - core::f64::consts::LN_2).abs() < 1e-9);
    }

    #[test]
    fn ln10_matches_f64() {
        let v = ln10(20, Rounding::Nearest);
        assert!((v.to_f64() - core::f64::consts::LN_10).abs() < 1e-9);
    }

    #[test]
    fn sqrt2_matches_f64() {
        let v = sqrt2(20, Rounding::Nearest);
        assert!((v.to_f64() - core::f64::consts::SQRT_2).abs() < 1e-9);
    }
}
