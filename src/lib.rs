//! Arbitrary-precision binary floating point: `sign * significand * 2^exponent`,
//! with a selectable decimal precision and four IEEE-754-style rounding
//! modes (spec §1-§3).
//!
//! - Precision and rounding mode are stored on each value, not fixed at the
//!   type level; mixed-precision arithmetic uses the higher of the two
//!   operands' precisions.
//! - Conversions to/from `f64` and the host big integer (`dashu-int`) degrade
//!   gracefully for NaN/infinite inputs; the only fallible conversion is
//!   [`FBig::to_ibig`], which rejects NaN/infinite values.
//! - Transcendental results are accurate to the requested precision plus
//!   guard digits, not necessarily correctly rounded (no attempt is made to
//!   avoid the Table-Maker's Dilemma).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod add;
mod cmp;
mod config;
mod consts;
mod convert;
mod div;
mod error;
mod exp;
mod fma;
mod fmt;
mod hyperbolic;
mod log;
mod mul;
mod ops;
mod parse;
mod pow;
mod repr;
mod round;
mod sqrt;
mod trig;
mod utils;

pub use config::{default_precision, default_rounding, set_default_precision, set_default_rounding};
pub use error::ConversionError;
pub use ops::RoundToInt;
pub use repr::{FBig, Special};
pub use round::Rounding;
