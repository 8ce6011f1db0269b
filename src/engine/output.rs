//! Estimate output type.
//!
//! ## Purpose
//!
//! This module defines the triple emitted once per refinement level: the
//! current integral estimate, the heuristic error bound, and the nominal
//! evaluation cost of reaching this level.
//!
//! ## Invariants
//!
//! * `error_estimate >= 0` (NaN propagates if the integrand produced it).
//! * `evaluations` is `1 + 12 * 2^k` at level k and strictly increases
//!   across a sequence.

// ============================================================================
// Output Type
// ============================================================================

/// One refinement level's integral estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Current estimate of the integral.
    pub value: f64,

    /// Heuristic error bound on [`value`](Self::value). Not certified.
    pub error_estimate: f64,

    /// Nominal number of integrand evaluations consumed up to and
    /// including this level.
    pub evaluations: usize,
}

impl Estimate {
    /// Heuristic confidence interval `(value - err, value + err)`.
    pub fn confidence(&self) -> (f64, f64) {
        (
            self.value - self.error_estimate,
            self.value + self.error_estimate,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_symmetric_around_value() {
        let est = Estimate {
            value: 2.0,
            error_estimate: 0.25,
            evaluations: 13,
        };
        assert_eq!(est.confidence(), (1.75, 2.25));
    }
}
