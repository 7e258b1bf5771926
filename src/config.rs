//! Process-wide configuration knobs (spec §5).
//!
//! Constructors that omit an explicit precision/rounding consult these two
//! statics. They use init-and-overwrite semantics: a reassignment only
//! affects values constructed afterwards, never values already built. No
//! locking protects them beyond what the atomics themselves provide —
//! callers using multiple threads must serialize their own updates, as the
//! spec requires.

use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use crate::round::Rounding;

const DEFAULT_PRECISION: usize = 50;

static DEFAULT_PRECISION_CELL: AtomicUsize = AtomicUsize::new(DEFAULT_PRECISION);
static DEFAULT_ROUNDING_CELL: AtomicU8 = AtomicU8::new(Rounding::Nearest as u8);

/// Get the current process-wide default precision (decimal digits).
#[inline]
pub fn default_precision() -> usize {
    DEFAULT_PRECISION_CELL.load(Ordering::Relaxed)
}

/// Set the process-wide default precision used by constructors that omit
/// an explicit precision. Takes effect for values constructed afterwards.
#[inline]
pub fn set_default_precision(precision: usize) {
    assert!(precision > 0, "precision must be a positive number of decimal digits");
    DEFAULT_PRECISION_CELL.store(precision, Ordering::Relaxed);
}

/// Get the current process-wide default rounding mode.
#[inline]
pub fn default_rounding() -> Rounding {
    Rounding::from_u8(DEFAULT_ROUNDING_CELL.load(Ordering::Relaxed))
}

/// Set the process-wide default rounding mode used by constructors that
/// omit an explicit rounding mode. Takes effect for values constructed
/// afterwards.
#[inline]
pub fn set_default_rounding(rounding: Rounding) {
    DEFAULT_ROUNDING_CELL.store(rounding as u8, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip() {
        let p = default_precision();
        let r = default_rounding();
        set_default_precision(77);
        set_default_rounding(Rounding::Zero);
        assert_eq!(default_precision(), 77);
        assert_eq!(default_rounding(), Rounding::Zero);
        // restore, since statics are process-wide and tests run concurrently
        set_default_precision(p);
        set_default_rounding(r);
    }
}
