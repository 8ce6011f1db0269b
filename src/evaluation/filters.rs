//! Convergence filters.
//!
//! ## Purpose
//!
//! This module turns a lazy refinement sequence into a single accepted
//! estimate, stopping as soon as a tolerance is met and falling back to
//! the deepest level otherwise.
//!
//! ## Design notes
//!
//! * **Short-circuit**: Filters consume the iterator lazily; levels past
//!   the accepted one are never computed.
//! * **Absolute margin**: The absolute filter compares the heuristic
//!   error against a tenth of the target, buying a safety margin for the
//!   uncertified bound.
//! * **Relative stall**: The relative filter watches consecutive values;
//!   acceptance means the last refinement moved the estimate by less than
//!   the target times the current error. Two consecutive exact zeros
//!   accept immediately, covering integrands that are odd about the
//!   midpoint.
//!
//! ## Invariants
//!
//! * A non-empty sequence always produces an estimate; only an empty one
//!   errors.
//!
//! ## Non-goals
//!
//! * No certified error control; acceptance trusts the heuristic bound.

use crate::engine::output::Estimate;
use crate::primitives::errors::TanhSinhError;

// ============================================================================
// Confidence Interval
// ============================================================================

/// Heuristic confidence interval `(value - err, value + err)`.
pub fn confidence(estimate: &Estimate) -> (f64, f64) {
    estimate.confidence()
}

// ============================================================================
// Absolute Filter
// ============================================================================

/// Accept the first estimate whose error is below a tenth of `target`.
///
/// Falls back to the deepest estimate when the target is never met;
/// errors only when the sequence yields nothing.
pub fn absolute<I>(target: f64, results: I) -> Result<Estimate, TanhSinhError>
where
    I: IntoIterator<Item = Estimate>,
{
    let mut last = None;
    for est in results {
        if est.error_estimate < 0.1 * target {
            return Ok(est);
        }
        last = Some(est);
    }
    last.ok_or(TanhSinhError::EmptySequence)
}

// ============================================================================
// Relative Filter
// ============================================================================

/// Accept the first estimate that moved less than `target` times its own
/// error relative to the previous level.
///
/// Consecutive exactly-zero values accept immediately. Falls back to the
/// deepest estimate when never satisfied; errors only when the sequence
/// yields nothing.
pub fn relative<I>(target: f64, results: I) -> Result<Estimate, TanhSinhError>
where
    I: IntoIterator<Item = Estimate>,
{
    let mut iter = results.into_iter();
    let mut prev = match iter.next() {
        Some(est) => est,
        None => return Err(TanhSinhError::EmptySequence),
    };
    for est in iter {
        let moved = (est.value - prev.value).abs();
        let both_zero = est.value == 0.0 && prev.value == 0.0;
        if both_zero || moved < target * est.error_estimate {
            return Ok(est);
        }
        prev = est;
    }
    Ok(prev)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn est(value: f64, error_estimate: f64, evaluations: usize) -> Estimate {
        Estimate {
            value,
            error_estimate,
            evaluations,
        }
    }

    #[test]
    fn absolute_takes_first_below_margin() {
        let seq = vec![est(1.0, 1e-2, 13), est(1.0, 1e-8, 25), est(1.0, 1e-12, 49)];
        let accepted = absolute(1e-6, seq).unwrap();
        assert_eq!(accepted.evaluations, 25);
    }

    #[test]
    fn absolute_falls_back_to_last() {
        let seq = vec![est(1.0, 1e-2, 13), est(1.0, 1e-3, 25)];
        let accepted = absolute(1e-9, seq).unwrap();
        assert_eq!(accepted.evaluations, 25);
    }

    #[test]
    fn absolute_margin_is_a_tenth() {
        // err == 0.1 * target is not strictly below the margin.
        let seq = vec![est(1.0, 1e-7, 13), est(1.0, 9.9e-8, 25)];
        let accepted = absolute(1e-6, seq).unwrap();
        assert_eq!(accepted.evaluations, 25);
    }

    #[test]
    fn empty_sequences_error() {
        assert_eq!(
            absolute(1e-6, Vec::new()),
            Err(TanhSinhError::EmptySequence)
        );
        assert_eq!(
            relative(1e-6, Vec::new()),
            Err(TanhSinhError::EmptySequence)
        );
    }

    #[test]
    fn relative_accepts_on_stall() {
        let seq = vec![est(1.5, 1e-1, 13), est(1.0, 1e-2, 25), est(1.0 + 1e-9, 1e-4, 49)];
        let accepted = relative(1e-3, seq).unwrap();
        assert_eq!(accepted.evaluations, 49);
    }

    #[test]
    fn relative_accepts_consecutive_zeros() {
        let seq = vec![est(0.0, 1e-3, 13), est(0.0, 1e-5, 25)];
        let accepted = relative(1e-12, seq).unwrap();
        assert_eq!(accepted.evaluations, 25);
    }

    #[test]
    fn relative_falls_back_to_last() {
        let seq = vec![est(1.0, 1e-3, 13), est(2.0, 1e-3, 25), est(3.0, 1e-3, 49)];
        let accepted = relative(1e-9, seq).unwrap();
        assert_eq!(accepted.evaluations, 49);
    }

    #[test]
    fn single_element_is_accepted() {
        let accepted = relative(1e-9, vec![est(4.0, 1.0, 13)]).unwrap();
        assert_eq!(accepted.value, 4.0);
    }
}
