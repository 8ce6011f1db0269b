//! Lazy refinement iterator.
//!
//! ## Purpose
//!
//! This module drives the tanh-sinh scheme: each call to `next()` refines
//! the running estimate by one level, folding that level's sample table
//! through the evaluation strategy and updating the error heuristic.
//!
//! ## Key concepts
//!
//! * **Doubling recurrence**: The seed tables bootstrap a coarse total;
//!   every later level adds only the sample locations the coarser levels
//!   missed, so halving the previous total and adding half the new sum
//!   yields the refined trapezoid total.
//! * **Affine mapping**: Samples live on the unit half-domain and are
//!   mapped onto `[a, b]` through the half-width `c = (b - a) / 2` and
//!   midpoint `d = (a + b) / 2`; emitted values and errors are scaled by
//!   `c`.
//! * **Nominal cost**: `evaluations` reports the classic doubling count
//!   `1 + 12 * 2^k`, a stable cost model for comparing levels and rules.
//!
//! ## Invariants
//!
//! * Nothing is computed before the first `next()` call.
//! * The sequence ends after the configured level cap; the table ceiling
//!   is hard at eight levels.
//!
//! ## Non-goals
//!
//! * No convergence decision; stopping rules live in the evaluation layer.

use crate::algorithms::strategy::EvalStrategy;
use crate::engine::output::Estimate;
use crate::math::rules::{richardson, trapezoid_step, update_error, Rule};
use crate::primitives::tables;

// ============================================================================
// Refinement Iterator
// ============================================================================

/// Lazy sequence of per-level integral estimates.
///
/// Construction assumes an already-validated interval and parameters; the
/// public builder in the API layer performs those checks.
pub struct Refinements<F, S> {
    f: F,
    strategy: S,
    rule: Rule,
    band: (f64, f64),
    /// Interval half-width.
    c: f64,
    /// Interval midpoint.
    d: f64,
    max_levels: usize,
    level: usize,
    prev_total: f64,
    prev_accel: f64,
    history: Option<(f64, f64)>,
}

impl<F, S> Refinements<F, S>
where
    F: Fn(f64) -> f64 + Sync,
    S: EvalStrategy,
{
    /// Build a sequence for `f` over `[a, b]`.
    ///
    /// Requires `a < b`, both finite, `1 <= max_levels <= MAX_LEVELS`, and
    /// a valid band (`lo < hi`, finite).
    pub fn new(f: F, a: f64, b: f64, rule: Rule, strategy: S, max_levels: usize, band: (f64, f64)) -> Self {
        Self {
            f,
            strategy,
            rule,
            band,
            c: (b - a) / 2.0,
            d: (a + b) / 2.0,
            max_levels,
            level: 0,
            prev_total: 0.0,
            prev_accel: 0.0,
            history: None,
        }
    }
}

impl<F, S> Iterator for Refinements<F, S>
where
    F: Fn(f64) -> f64 + Sync,
    S: EvalStrategy,
{
    type Item = Estimate;

    fn next(&mut self) -> Option<Estimate> {
        if self.level >= self.max_levels {
            return None;
        }
        let k = self.level;

        // Level 0 seeds the coarse total and refines it with the quarter
        // table; deeper levels pull their own sample table.
        let new = if k == 0 {
            let coarse = tables::BASE_WEIGHT * (self.f)(self.d)
                + self
                    .strategy
                    .weighted_sum(&tables::SEED_HALF, &self.f, self.c, self.d);
            self.prev_total = coarse;
            self.strategy
                .weighted_sum(&tables::SEED_QUARTER, &self.f, self.c, self.d)
        } else {
            self.strategy
                .weighted_sum(tables::LEVELS[k - 1], &self.f, self.c, self.d)
        };

        let (total, trap_delta) = trapezoid_step(self.prev_total, new);

        let (value, delta) = match self.rule {
            Rule::Trapezoid => (total, trap_delta),
            Rule::Simpson => {
                let accel = richardson(total, self.prev_total);
                let delta = if k == 0 {
                    trap_delta
                } else {
                    (accel - self.prev_accel).abs()
                };
                self.prev_accel = accel;
                (accel, delta)
            }
        };

        let error = update_error(delta, self.history, self.band);
        self.history = Some((delta, error));
        self.prev_total = total;
        self.level += 1;

        Some(Estimate {
            value: value * self.c,
            error_estimate: error * self.c,
            evaluations: 1 + 12 * (1 << k),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.max_levels - self.level;
        (remaining, Some(remaining))
    }
}

impl<F, S> ExactSizeIterator for Refinements<F, S>
where
    F: Fn(f64) -> f64 + Sync,
    S: EvalStrategy,
{
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::strategy::Sequential;
    use crate::math::rules::QUADRATIC_BAND;
    use crate::primitives::tables::MAX_LEVELS;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn trap_seq<F: Fn(f64) -> f64 + Sync>(f: F, a: f64, b: f64) -> Refinements<F, Sequential> {
        Refinements::new(f, a, b, Rule::Trapezoid, Sequential, MAX_LEVELS, QUADRATIC_BAND)
    }

    #[test]
    fn nothing_runs_before_first_next() {
        let calls = AtomicUsize::new(0);
        let mut seq = trap_seq(
            |x: f64| {
                calls.fetch_add(1, Ordering::Relaxed);
                x
            },
            0.0,
            1.0,
        );
        assert_eq!(calls.load(Ordering::Relaxed), 0);
        seq.next();
        assert!(calls.load(Ordering::Relaxed) > 0);
    }

    #[test]
    fn evaluation_counts_double() {
        let counts: Vec<usize> = trap_seq(|x: f64| x.sin(), 0.0, 1.0)
            .map(|est| est.evaluations)
            .collect();
        assert_eq!(counts, vec![13, 25, 49, 97, 193, 385, 769, 1537]);
    }

    #[test]
    fn level_cap_bounds_the_sequence() {
        let seq = Refinements::new(
            |x: f64| x,
            0.0,
            1.0,
            Rule::Trapezoid,
            Sequential,
            3,
            QUADRATIC_BAND,
        );
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.count(), 3);
    }

    #[test]
    fn constant_integrand_is_near_exact_at_level_zero() {
        let first = trap_seq(|_| 3.0, 2.0, 5.0).next().unwrap();
        assert!((first.value - 9.0).abs() < 1e-11 * 9.0);
        assert_eq!(first.evaluations, 13);
    }

    #[test]
    fn odd_integrand_estimates_are_exactly_zero() {
        for est in trap_seq(|x: f64| x, -1.0, 1.0) {
            assert_eq!(est.value, 0.0);
        }
    }
}
