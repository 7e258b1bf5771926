//! Exponential (spec §4.9). The teacher's `float/src/exp.rs` was an
//! `unimplemented!()` stub (binary-exponentiation-over-Taylor-series
//! sketch only); this body follows the spec's identity instead, reusing
//! `sinh`/`sqrt` rather than a separate reduction.

use dashu_base::Sign;

use crate::repr::{FBig, Special};

impl FBig {
    /// `exp x = sinh x + sqrt(1 + sinh^2 x)`.
    pub fn exp(&self) -> Self {
        match self.special {
            Special::Nan => FBig::nan(self.precision, self.rounding),
            Special::Infinite => {
                if self.sign == Sign::Negative {
                    FBig::zero(self.precision, self.rounding, Sign::Positive)
                } else {
                    FBig::infinity(self.precision, self.rounding, Sign::Positive)
                }
            }
            Special::Zero => FBig::from_i64(1, self.precision, self.rounding),
            Special::Normal => {
                if self.sign == Sign::Negative {
                    let one = FBig::from_i64(1, self.precision, self.rounding);
                    return one.div(&self.neg().exp());
                }
                if self.trunc().equal(self) {
                    let e = crate::consts::e(self.precision, self.rounding);
                    return e.pow(self);
                }
                let one = FBig::from_i64(1, self.precision, self.rounding);
                let sinh = self.sinh();
                let inner = one.add(&sinh.mul(&sinh)).sqrt();
                sinh.add(&inner)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Rounding;

    #[test]
    fn exp_of_zero_is_one() {
        let v = FBig::from_i64(0, 30, Rounding::Nearest);
        assert!((v.exp().to_f64() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn exp_of_one_matches_e_constant() {
        // spec §8 scenario 4
        let v = FBig::from_i64(1, 50, Rounding::Nearest);
        let e = crate::consts::e(50, Rounding::Nearest);
        let diff = (&v.exp() - &e).abs();
        assert!(diff.to_f64() < 1e-20);
    }

    #[test]
    fn exp_of_negative_is_reciprocal() {
        let v = FBig::from_i64(2, 30, Rounding::Nearest);
        let pos = v.exp();
        let neg = v.neg().exp();
        let product = pos.mul(&neg);
        assert!((product.to_f64() - 1.0).abs() < 1e-6);
    }
}
