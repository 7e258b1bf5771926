//! Addition and subtraction (spec §4.3). Subtraction delegates to addition
//! with the second operand negated, as the spec prescribes.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use dashu_int::IBig;

use crate::repr::{FBig, Special};
use crate::round::Rounding;

impl FBig {
    /// `a + b`, taking the working precision and rounding mode from `self`
    /// when the two operands disagree (the higher precision wins, per
    /// spec §4.3; the rounding mode of the left operand is used, matching
    /// the teacher's `Context::max` convention of deferring to the caller's
    /// context rather than silently picking one operand's rounding mode).
    pub fn add(&self, other: &Self) -> Self {
        let precision = self.precision.max(other.precision);
        let rounding = self.rounding;

        use Special::*;
        match (self.special, other.special) {
            (Nan, _) | (_, Nan) => FBig::nan(precision, rounding),
            (Infinite, Infinite) => {
                if self.sign == other.sign {
                    FBig::infinity(precision, rounding, self.sign)
                } else {
                    FBig::nan(precision, rounding)
                }
            }
            (Infinite, _) => FBig::infinity(precision, rounding, self.sign),
            (_, Infinite) => FBig::infinity(precision, rounding, other.sign),
            (Zero, Zero) => FBig::zero(precision, rounding, dashu_base::Sign::Positive),
            (Zero, _) => other.clone().with_precision(precision).with_rounding(rounding),
            (_, Zero) => self.clone().with_precision(precision).with_rounding(rounding),
            (Normal, Normal) => add_normals(self, other, precision, rounding),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }
}

fn add_normals(a: &FBig, b: &FBig, precision: usize, rounding: Rounding) -> FBig {
    let ea = a.effective_lsb_exponent();
    let eb = b.effective_lsb_exponent();
    let common = ea.min(eb);

    let sa: IBig = if a.sign == dashu_base::Sign::Positive {
        IBig::from(a.significand().clone())
    } else {
        -IBig::from(a.significand().clone())
    };
    let sb: IBig = if b.sign == dashu_base::Sign::Positive {
        IBig::from(b.significand().clone())
    } else {
        -IBig::from(b.significand().clone())
    };

    let shifted_a = sa << (ea - common) as usize;
    let shifted_b = sb << (eb - common) as usize;
    let sum = shifted_a + shifted_b;

    if sum == IBig::ZERO {
        return FBig::zero(precision, rounding, dashu_base::Sign::Positive);
    }

    let sign = if sum < IBig::ZERO { dashu_base::Sign::Negative } else { dashu_base::Sign::Positive };
    let magnitude = if sign == dashu_base::Sign::Negative { -sum } else { sum };
    let magnitude = magnitude.unsigned_abs();

    use dashu_base::BitTest;
    let bitlen = magnitude.bit_len() as i64;
    let exponent = common + bitlen - 1;

    FBig::from_raw_parts(sign, magnitude, exponent, precision, rounding)
}

impl Neg for FBig {
    type Output = FBig;
    fn neg(self) -> FBig {
        FBig::neg(&self)
    }
}

impl Neg for &FBig {
    type Output = FBig;
    fn neg(self) -> FBig {
        FBig::neg(self)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $core_method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait<FBig> for FBig {
            type Output = FBig;
            fn $method(self, rhs: FBig) -> FBig {
                FBig::$core_method(&self, &rhs)
            }
        }
        impl $trait<&FBig> for FBig {
            type Output = FBig;
            fn $method(self, rhs: &FBig) -> FBig {
                FBig::$core_method(&self, rhs)
            }
        }
        impl $trait<FBig> for &FBig {
            type Output = FBig;
            fn $method(self, rhs: FBig) -> FBig {
                FBig::$core_method(self, &rhs)
            }
        }
        impl $trait<&FBig> for &FBig {
            type Output = FBig;
            fn $method(self, rhs: &FBig) -> FBig {
                FBig::$core_method(self, rhs)
            }
        }
        impl $assign_trait<FBig> for FBig {
            fn $assign_method(&mut self, rhs: FBig) {
                *self = FBig::$core_method(self, &rhs);
            }
        }
        impl $assign_trait<&FBig> for FBig {
            fn $assign_method(&mut self, rhs: &FBig) {
                *self = FBig::$core_method(self, rhs);
            }
        }
    };
}

impl_binop!(Add, add, add, AddAssign, add_assign);
impl_binop!(Sub, sub, sub, SubAssign, sub_assign);
