//! Refinement rules and the convergence-order error heuristic.
//!
//! ## Purpose
//!
//! This module defines the rule applied at each refinement level (plain
//! trapezoid halving or Richardson-accelerated Simpson) and the heuristic
//! that turns successive level-to-level deltas into an error estimate.
//!
//! ## Key concepts
//!
//! * **Trapezoid update**: Each level halves the parameter step; the new
//!   total is half the previous total plus half the new samples' sum, and
//!   the level delta is the magnitude of the correction.
//! * **Simpson acceleration**: One Richardson extrapolation step,
//!   `(4 * total - prev_total) / 3`, removes the leading error term of the
//!   trapezoid sequence; the delta is then taken between consecutive
//!   accelerated values.
//! * **Quadratic detection**: When the ratio of consecutive log-deltas
//!   falls inside a narrow band around 2, the sequence is converging
//!   quadratically and the delta may be squared to a sharper estimate.
//!
//! ## Invariants
//!
//! * Error estimates are non-negative.
//! * A zero delta (exact stall) carries the previous estimate forward
//!   rather than claiming a zero error.
//!
//! ## Non-goals
//!
//! * The estimate is heuristic, not a certified bound.

// ============================================================================
// Rule Selection
// ============================================================================

/// Refinement rule applied at each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rule {
    /// Plain trapezoid halving.
    #[default]
    Trapezoid,

    /// Trapezoid halving with one Richardson extrapolation step per level.
    Simpson,
}

/// Default open band on the log-delta ratio inside which convergence is
/// treated as quadratic and the delta is squared.
pub const QUADRATIC_BAND: (f64, f64) = (1.99, 2.01);

// ============================================================================
// Rule Steps
// ============================================================================

/// One trapezoid halving step.
///
/// Returns `(total, delta)` where `total` is the refined running sum and
/// `delta` the magnitude of the correction this level applied.
#[inline]
pub fn trapezoid_step(prev_total: f64, new: f64) -> (f64, f64) {
    let half = 0.5 * prev_total;
    let total = 0.5 * new + half;
    (total, (0.5 * new - half).abs())
}

/// One Richardson extrapolation step over the trapezoid sequence.
#[inline]
pub fn richardson(total: f64, prev_total: f64) -> f64 {
    (4.0 * total - prev_total) / 3.0
}

// ============================================================================
// Error Heuristic
// ============================================================================

/// Update the error estimate from the current level delta.
///
/// `history` is `None` at the first emitted level (the delta is taken as
/// the estimate directly) and `Some((prev_delta, prev_error))` afterwards.
/// A zero delta on either side of the ratio carries the previous estimate
/// forward; otherwise the log-delta ratio is tested against `band` and the
/// delta is squared when convergence looks quadratic.
#[inline]
pub fn update_error(delta: f64, history: Option<(f64, f64)>, band: (f64, f64)) -> f64 {
    match history {
        None => delta,
        Some((prev_delta, prev_error)) => {
            if delta == 0.0 || prev_delta == 0.0 {
                prev_error
            } else {
                let r = delta.ln() / prev_delta.ln();
                if r > band.0 && r < band.1 {
                    delta * delta
                } else {
                    delta
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapezoid_step_halves_and_corrects() {
        let (total, delta) = trapezoid_step(4.0, 6.0);
        assert_eq!(total, 5.0);
        assert_eq!(delta, 1.0);
    }

    #[test]
    fn richardson_removes_leading_term() {
        // Exact sequence: total already converged.
        assert_eq!(richardson(3.0, 3.0), 3.0);
    }

    #[test]
    fn first_level_takes_delta_directly() {
        assert_eq!(update_error(1e-3, None, QUADRATIC_BAND), 1e-3);
    }

    #[test]
    fn zero_delta_carries_previous_error() {
        assert_eq!(update_error(0.0, Some((1e-3, 5e-4)), QUADRATIC_BAND), 5e-4);
        assert_eq!(update_error(1e-6, Some((0.0, 5e-4)), QUADRATIC_BAND), 5e-4);
    }

    #[test]
    fn quadratic_ratio_squares_delta() {
        // ln(1e-8)/ln(1e-4) = 2 exactly.
        let err = update_error(1e-8, Some((1e-4, 1.0)), QUADRATIC_BAND);
        assert_eq!(err, 1e-16);
    }

    #[test]
    fn non_quadratic_ratio_keeps_delta() {
        // ln(1e-6)/ln(1e-4) = 1.5, outside the band.
        let err = update_error(1e-6, Some((1e-4, 1.0)), QUADRATIC_BAND);
        assert_eq!(err, 1e-6);
    }
}
