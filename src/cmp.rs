//! Total order with NaN/zero/infinity rules (spec §4.13).

use core::cmp::Ordering;

use dashu_base::Sign;

use crate::repr::{FBig, Special};

impl FBig {
    /// `a == b`: NaN compares unequal to everything including itself; both
    /// zeros are equal regardless of sign; both infinities are equal iff
    /// their signs match; normals compare structurally.
    pub fn equal(&self, other: &Self) -> bool {
        match (self.special, other.special) {
            (Special::Nan, _) | (_, Special::Nan) => false,
            (Special::Zero, Special::Zero) => true,
            (Special::Infinite, Special::Infinite) => self.sign == other.sign,
            (Special::Normal, Special::Normal) => {
                self.sign == other.sign
                    && self.exponent == other.exponent
                    && self.significand == other.significand
            }
            _ => false,
        }
    }

    pub fn not_equal(&self, other: &Self) -> bool {
        !self.equal(other)
    }

    /// `a < b`, with any NaN operand returning `false` (spec §4.13).
    pub fn less(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        match (self.special, other.special) {
            (Special::Infinite, Special::Infinite) => {
                // equal same-sign infinities compare false; else sign decides.
                self.sign == Sign::Negative && other.sign == Sign::Positive
            }
            (Special::Zero, Special::Zero) => false,
            (Special::Infinite, _) => self.sign == Sign::Negative,
            (_, Special::Infinite) => other.sign == Sign::Positive,
            (Special::Zero, Special::Normal) => other.sign == Sign::Positive,
            (Special::Normal, Special::Zero) => self.sign == Sign::Negative,
            (Special::Normal, Special::Normal) => {
                if self.sign != other.sign {
                    return self.sign == Sign::Negative;
                }
                let mag = self.magnitude_cmp(other);
                if self.sign == Sign::Positive {
                    mag == Ordering::Less
                } else {
                    mag == Ordering::Greater
                }
            }
            _ => false,
        }
    }

    pub fn less_equal(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        self.less(other) || self.equal(other)
    }

    pub fn greater(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        other.less(self)
    }

    pub fn greater_equal(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        other.less(self) || self.equal(other)
    }

    /// Returns -1/0/+1, or `None` if either operand is NaN.
    pub fn cmp_total(&self, other: &Self) -> Option<i8> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        if self.equal(other) {
            Some(0)
        } else if self.less(other) {
            Some(-1)
        } else {
            Some(1)
        }
    }
}

impl PartialEq for FBig {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl PartialOrd for FBig {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cmp_total(other).map(|o| match o {
            i8::MIN..=-1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::round::Rounding;

    use crate::repr::FBig;

    fn p(s: &str) -> FBig {
        FBig::from_str_with(s, 50, Rounding::Nearest)
    }

    #[test]
    fn nan_unequal_to_itself() {
        let nan = FBig::nan(50, Rounding::Nearest);
        assert!(!nan.equal(&nan));
        assert!(nan.not_equal(&nan));
    }

    #[test]
    fn zeros_equal_regardless_of_sign() {
        use dashu_base::Sign;
        let pz = FBig::zero(50, Rounding::Nearest, Sign::Positive);
        let nz = FBig::zero(50, Rounding::Nearest, Sign::Negative);
        assert!(pz.equal(&nz));
    }

    #[test]
    fn ordering_basic() {
        let a = p("1.5");
        let b = p("2.5");
        assert!(a.less(&b));
        assert!(b.greater(&a));
        assert!(!a.equal(&b));
    }
}
