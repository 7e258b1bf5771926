//! Error types and named panic helpers.
//!
//! Mirrors the teacher's `check_inf_operands`/`panic_operate_with_inf` shape:
//! a handful of named functions instead of scattered `panic!()` call sites,
//! plus the one place the spec requires an out-of-band error carrier
//! (`toBigInt` of NaN/infinity, spec §7).

use core::fmt;

use crate::repr::{FBig, Special};

/// Failure to convert a [`FBig`] into an exact host integer.
///
/// This is the only operation in the crate that signals failure out of
/// band instead of returning NaN in-band (spec §7 "Conversion failure").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The source value was NaN.
    NotANumber,
    /// The source value was +infinity or -infinity.
    Infinite,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::NotANumber => f.write_str("cannot convert NaN to an integer"),
            ConversionError::Infinite => f.write_str("cannot convert an infinite value to an integer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

#[inline]
pub(crate) fn check_convertible(x: &FBig) -> Result<(), ConversionError> {
    match x.special() {
        Special::Nan => Err(ConversionError::NotANumber),
        Special::Infinite => Err(ConversionError::Infinite),
        Special::Zero | Special::Normal => Ok(()),
    }
}

/// Panics when an operation that is only defined on finite values is
/// given an infinite operand.
#[inline]
pub(crate) const fn panic_operate_with_inf() -> ! {
    panic!("this operation is not defined for infinite operands")
}

/// Panics when constructing a value with a non-positive decimal precision.
#[inline]
pub(crate) const fn panic_invalid_precision() -> ! {
    panic!("precision must be a positive number of decimal digits")
}
