//! Input validation.
//!
//! ## Purpose
//!
//! This module centralizes the precondition checks performed before a
//! refinement sequence is constructed: interval sanity, the quadratic
//! detection band, and the level cap.
//!
//! ## Design notes
//!
//! * **Fail fast**: All checks run at configuration or call time, never
//!   mid-refinement. A sequence that starts will run to its level cap.
//! * **Data vs. fault**: Integrand output is never validated; NaN and
//!   infinity propagate through estimates as data.
//!
//! ## Invariants
//!
//! * Validation does not mutate inputs.
//! * Error variants carry the offending values.

use crate::primitives::errors::TanhSinhError;
use crate::primitives::tables::MAX_LEVELS;

// ============================================================================
// Validator
// ============================================================================

/// Precondition checks for quadrature inputs.
pub struct Validator;

impl Validator {
    /// Check that both bounds are finite and strictly ordered.
    pub fn validate_interval(a: f64, b: f64) -> Result<(), TanhSinhError> {
        if !a.is_finite() {
            return Err(TanhSinhError::NonFiniteBound {
                bound: "a",
                value: a,
            });
        }
        if !b.is_finite() {
            return Err(TanhSinhError::NonFiniteBound {
                bound: "b",
                value: b,
            });
        }
        if a >= b {
            return Err(TanhSinhError::IntervalOrder { a, b });
        }
        Ok(())
    }

    /// Check that the quadratic detection band is a finite, non-empty
    /// open interval.
    pub fn validate_band(lo: f64, hi: f64) -> Result<(), TanhSinhError> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(TanhSinhError::InvalidBand { lo, hi });
        }
        Ok(())
    }

    /// Check that the level cap is positive and within the table ceiling.
    pub fn validate_max_levels(levels: usize) -> Result<(), TanhSinhError> {
        if levels == 0 || levels > MAX_LEVELS {
            return Err(TanhSinhError::InvalidMaxLevels {
                got: levels,
                max: MAX_LEVELS,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_finite_interval_passes() {
        assert!(Validator::validate_interval(-1.0, 2.5).is_ok());
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let err = Validator::validate_interval(2.0, 2.0).unwrap_err();
        assert_eq!(err, TanhSinhError::IntervalOrder { a: 2.0, b: 2.0 });
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(matches!(
            Validator::validate_interval(f64::NAN, 1.0),
            Err(TanhSinhError::NonFiniteBound { bound: "a", .. })
        ));
        assert!(matches!(
            Validator::validate_interval(0.0, f64::INFINITY),
            Err(TanhSinhError::NonFiniteBound { bound: "b", .. })
        ));
    }

    #[test]
    fn degenerate_band_is_rejected() {
        assert!(Validator::validate_band(2.01, 1.99).is_err());
        assert!(Validator::validate_band(1.99, f64::NAN).is_err());
        assert!(Validator::validate_band(1.99, 2.01).is_ok());
    }

    #[test]
    fn level_cap_respects_table_ceiling() {
        assert!(Validator::validate_max_levels(0).is_err());
        assert!(Validator::validate_max_levels(MAX_LEVELS + 1).is_err());
        assert!(Validator::validate_max_levels(MAX_LEVELS).is_ok());
        assert!(Validator::validate_max_levels(1).is_ok());
    }
}
