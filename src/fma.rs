//! Fused multiply-add (spec §6 arithmetic surface: `fma`).
//!
//! `fma(a, b, c) = a*b + c` computed with a single final rounding: the
//! product and the sum are both carried at elevated (guard-digit) precision
//! and only the very last step rounds down to the caller's target
//! precision, avoiding the double rounding that `a.mul(b).add(c)` performs
//! (round once after the multiply, again after the add).

use crate::repr::FBig;

impl FBig {
    /// `self * b + c`, rounded once at the working precision of the three
    /// operands (the max of their precisions), using `self`'s rounding mode.
    pub fn fma(&self, b: &Self, c: &Self) -> Self {
        let precision = self.precision.max(b.precision).max(c.precision);
        let rounding = self.rounding;
        let guard = crate::div::guard_digits(precision);
        let work_precision = precision + guard;

        let a_wide = self.clone().with_precision(work_precision).with_rounding(rounding);
        let b_wide = b.clone().with_precision(work_precision).with_rounding(rounding);
        let c_wide = c.clone().with_precision(work_precision).with_rounding(rounding);

        let product = a_wide.mul(&b_wide);
        let sum = product.add(&c_wide);
        sum.with_precision(precision).with_rounding(rounding)
    }
}

#[cfg(test)]
mod tests {
    use crate::round::Rounding;

    use super::*;

    fn p(s: &str) -> FBig {
        FBig::from_str_with(s, 50, Rounding::Nearest)
    }

    #[test]
    fn matches_separate_mul_add_away_from_rounding_boundaries() {
        let a = p("2.5");
        let b = p("4");
        let c = p("1.5");
        let fused = a.fma(&b, &c);
        let separate = a.mul(&b).add(&c);
        assert_eq!(fused, separate);
    }

    #[test]
    fn special_values_propagate_through_the_underlying_mul_and_add() {
        let nan = FBig::nan(50, Rounding::Nearest);
        let one = p("1");
        assert!(one.fma(&one, &nan).is_nan());
        assert!(nan.fma(&one, &one).is_nan());
    }

    #[test]
    fn zero_times_anything_plus_c_is_c() {
        let zero = FBig::zero(50, Rounding::Nearest, dashu_base::Sign::Positive);
        let c = p("3.25");
        assert_eq!(zero.fma(&p("9"), &c), c);
    }
}
