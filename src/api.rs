//! Layer 6: API
//!
//! # Purpose
//!
//! This layer provides the public surface of the crate:
//! - The fluent [`Integrator`] builder and the validated [`Method`] it
//!   produces
//! - The four classic entry points `trap`, `simpson`, `par_trap`, and
//!   `par_simpson`
//! - The re-exports backing the crate prelude
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

use crate::engine::validator::Validator;
use crate::evaluation::filters;
use crate::primitives::tables::MAX_LEVELS;

// ============================================================================
// Tolerance
// ============================================================================

/// Stopping rule applied by [`Method::integrate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// Accept the first level whose error drops below a tenth of the
    /// target.
    Absolute(f64),

    /// Accept the first level that moved less than the target times its
    /// own error.
    Relative(f64),
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent configuration for a quadrature method.
///
/// Defaults: trapezoid rule, sequential evaluation, the full eight-level
/// depth, and the standard quadratic detection band.
#[derive(Debug, Clone)]
pub struct Integrator<S = Sequential> {
    rule: Rule,
    strategy: S,
    max_levels: usize,
    band: (f64, f64),
}

impl Integrator<Sequential> {
    /// Start from the defaults.
    pub fn new() -> Self {
        Self {
            rule: Rule::Trapezoid,
            strategy: Sequential,
            max_levels: MAX_LEVELS,
            band: QUADRATIC_BAND,
        }
    }
}

impl Default for Integrator<Sequential> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Integrator<S> {
    /// Set the refinement rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Cap the refinement depth (1 through the eight-level table ceiling).
    pub fn max_levels(mut self, levels: usize) -> Self {
        self.max_levels = levels;
        self
    }

    /// Override the quadratic detection band of the error heuristic.
    pub fn quadratic_band(mut self, lo: f64, hi: f64) -> Self {
        self.band = (lo, hi);
        self
    }

    /// Swap in a different evaluation strategy.
    pub fn strategy<T: EvalStrategy>(self, strategy: T) -> Integrator<T> {
        Integrator {
            rule: self.rule,
            strategy,
            max_levels: self.max_levels,
            band: self.band,
        }
    }

    /// Validate the configuration into a ready [`Method`].
    pub fn build(self) -> Result<Method<S>, TanhSinhError> {
        Validator::validate_max_levels(self.max_levels)?;
        Validator::validate_band(self.band.0, self.band.1)?;
        Ok(Method {
            rule: self.rule,
            strategy: self.strategy,
            max_levels: self.max_levels,
            band: self.band,
        })
    }
}

// ============================================================================
// Method
// ============================================================================

/// A validated quadrature configuration.
#[derive(Debug, Clone)]
pub struct Method<S = Sequential> {
    rule: Rule,
    strategy: S,
    max_levels: usize,
    band: (f64, f64),
}

impl<S> Method<S>
where
    S: EvalStrategy + Clone,
{
    /// Lazy per-level estimates for `f` over `[a, b]`.
    pub fn refinements<F>(&self, f: F, a: f64, b: f64) -> Result<Refinements<F, S>, TanhSinhError>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        Validator::validate_interval(a, b)?;
        Ok(Refinements::new(
            f,
            a,
            b,
            self.rule,
            self.strategy.clone(),
            self.max_levels,
            self.band,
        ))
    }

    /// Refine until `tolerance` accepts, falling back to the deepest
    /// level.
    pub fn integrate<F>(
        &self,
        f: F,
        a: f64,
        b: f64,
        tolerance: Tolerance,
    ) -> Result<Estimate, TanhSinhError>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        let seq = self.refinements(f, a, b)?;
        match tolerance {
            Tolerance::Absolute(target) => filters::absolute(target, seq),
            Tolerance::Relative(target) => filters::relative(target, seq),
        }
    }
}

// ============================================================================
// Classic Entry Points
// ============================================================================

/// Trapezoid refinements of `f` over `[a, b]`, evaluated sequentially.
pub fn trap<F>(f: F, a: f64, b: f64) -> Result<Refinements<F, Sequential>, TanhSinhError>
where
    F: Fn(f64) -> f64 + Sync,
{
    Integrator::new().build()?.refinements(f, a, b)
}

/// Simpson-accelerated refinements of `f` over `[a, b]`, evaluated
/// sequentially.
pub fn simpson<F>(f: F, a: f64, b: f64) -> Result<Refinements<F, Sequential>, TanhSinhError>
where
    F: Fn(f64) -> f64 + Sync,
{
    Integrator::new()
        .rule(Rule::Simpson)
        .build()?
        .refinements(f, a, b)
}

/// Trapezoid refinements with chunked parallel evaluation.
#[cfg(feature = "parallel")]
pub fn par_trap<F>(f: F, a: f64, b: f64) -> Result<Refinements<F, Chunked>, TanhSinhError>
where
    F: Fn(f64) -> f64 + Sync,
{
    Integrator::new()
        .strategy(Chunked::default())
        .build()?
        .refinements(f, a, b)
}

/// Simpson-accelerated refinements with chunked parallel evaluation.
#[cfg(feature = "parallel")]
pub fn par_simpson<F>(f: F, a: f64, b: f64) -> Result<Refinements<F, Chunked>, TanhSinhError>
where
    F: Fn(f64) -> f64 + Sync,
{
    Integrator::new()
        .rule(Rule::Simpson)
        .strategy(Chunked::default())
        .build()?
        .refinements(f, a, b)
}

// ============================================================================
// Re-exports
// ============================================================================

#[cfg(feature = "parallel")]
pub use crate::algorithms::strategy::Chunked;
pub use crate::algorithms::strategy::{EvalStrategy, Sequential};
pub use crate::engine::output::Estimate;
pub use crate::engine::refine::Refinements;
pub use crate::evaluation::filters::{absolute, confidence, relative};
pub use crate::math::rules::{Rule, QUADRATIC_BAND};
pub use crate::math::transform::{everywhere, non_negative, Integrand};
pub use crate::primitives::errors::TanhSinhError;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_bad_parameters() {
        assert!(Integrator::new().max_levels(0).build().is_err());
        assert!(Integrator::new().max_levels(9).build().is_err());
        assert!(Integrator::new().quadratic_band(2.01, 1.99).build().is_err());
        assert!(Integrator::new().max_levels(5).build().is_ok());
    }

    #[test]
    fn entry_points_validate_the_interval() {
        assert!(matches!(
            trap(|x: f64| x, 1.0, 0.0),
            Err(TanhSinhError::IntervalOrder { .. })
        ));
        assert!(matches!(
            simpson(|x: f64| x, f64::NAN, 1.0),
            Err(TanhSinhError::NonFiniteBound { bound: "a", .. })
        ));
    }

    #[test]
    fn integrate_applies_the_tolerance() {
        let method = Integrator::new().build().unwrap();
        let est = method
            .integrate(|x: f64| x.sin(), 0.0, std::f64::consts::PI, Tolerance::Absolute(1e-6))
            .unwrap();
        assert!((est.value - 2.0).abs() < 1e-6);
        assert!(est.error_estimate < 1e-7);
    }
}
