//! Multiplication (spec §4.4).

use core::ops::{Mul, MulAssign};

use dashu_base::{BitTest, Sign};

use crate::repr::{FBig, Special};

impl FBig {
    pub fn mul(&self, other: &Self) -> Self {
        let precision = self.precision.max(other.precision);
        let rounding = self.rounding;
        let sign = self.sign * other.sign;

        use Special::*;
        match (self.special, other.special) {
            (Nan, _) | (_, Nan) => FBig::nan(precision, rounding),
            (Infinite, Zero) | (Zero, Infinite) => FBig::nan(precision, rounding),
            (Infinite, _) | (_, Infinite) => FBig::infinity(precision, rounding, sign),
            (Zero, _) | (_, Zero) => FBig::zero(precision, rounding, Sign::Positive),
            (Normal, Normal) => {
                let product = self.significand().clone() * other.significand().clone();
                let bits_a = self.bit_len() as i64;
                let bits_b = other.bit_len() as i64;
                let product_bits = product.bit_len() as i64;
                // product has either bits_a + bits_b - 1 or bits_a + bits_b bits (spec §4.4).
                let extra = product_bits - (bits_a + bits_b - 1);
                let exponent = self.exponent_raw() + other.exponent_raw() + extra;
                FBig::from_raw_parts(sign, product, exponent, precision, rounding)
            }
        }
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait<FBig> for FBig {
            type Output = FBig;
            fn $method(self, rhs: FBig) -> FBig {
                FBig::mul(&self, &rhs)
            }
        }
        impl $trait<&FBig> for FBig {
            type Output = FBig;
            fn $method(self, rhs: &FBig) -> FBig {
                FBig::mul(&self, rhs)
            }
        }
        impl $trait<FBig> for &FBig {
            type Output = FBig;
            fn $method(self, rhs: FBig) -> FBig {
                FBig::mul(self, &rhs)
            }
        }
        impl $trait<&FBig> for &FBig {
            type Output = FBig;
            fn $method(self, rhs: &FBig) -> FBig {
                FBig::mul(self, rhs)
            }
        }
        impl $assign_trait<FBig> for FBig {
            fn $assign_method(&mut self, rhs: FBig) {
                *self = FBig::mul(self, &rhs);
            }
        }
        impl $assign_trait<&FBig> for FBig {
            fn $assign_method(&mut self, rhs: &FBig) {
                *self = FBig::mul(self, rhs);
            }
        }
    };
}

impl_binop!(Mul, mul, MulAssign, mul_assign);

#[cfg(test)]
mod tests {
    use crate::round::Rounding;

    use super::*;

    fn p(s: &str) -> FBig {
        FBig::from_str_with(s, 50, Rounding::Nearest)
    }

    #[test]
    fn commutative() {
        let a = p("2.5");
        let b = p("7.25");
        assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn zero_times_inf_is_nan() {
        let inf = FBig::infinity(50, Rounding::Nearest, Sign::Positive);
        let z = FBig::zero(50, Rounding::Nearest, Sign::Positive);
        assert!((&inf * &z).is_nan());
    }

    #[test]
    fn power_of_two_hundred() {
        // spec §8 scenario 6: pow is implemented separately, but the
        // underlying repeated-squaring multiply must cross power-of-two
        // boundaries correctly.
        let two = p("2");
        let mut acc = p("1");
        for _ in 0..10 {
            acc = &acc * &two;
        }
        assert!(acc.is_normal());
    }
}
