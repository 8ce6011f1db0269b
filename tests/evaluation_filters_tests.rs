//! Tests for the convergence filters.
//!
//! These tests verify the stopping rules applied to refinement
//! sequences:
//! - Absolute and relative acceptance
//! - Fallback to the deepest level
//! - Empty-sequence errors
//! - The heuristic confidence interval
//!
//! ## Test Organization
//!
//! 1. **Absolute Filter** - Margin, acceptance, fallback
//! 2. **Relative Filter** - Stall detection, exact zeros, fallback
//! 3. **Degenerate Input** - Empty sequences
//! 4. **Confidence Interval** - Width and symmetry

use std::f64::consts::PI;

use approx::assert_relative_eq;

use tanhsinh::prelude::*;

// ============================================================================
// Absolute Filter Tests
// ============================================================================

/// The absolute filter short-circuits: it accepts the first level below
/// a tenth of the target rather than the deepest one.
#[test]
fn test_absolute_short_circuits() {
    let accepted = absolute(1e-4, trap(|x: f64| x.sin(), 0.0, PI).unwrap()).unwrap();

    assert!(accepted.evaluations < 1537);
    assert!(accepted.error_estimate < 1e-5);
}

/// An unreachable target falls back to the deepest level.
#[test]
fn test_absolute_falls_back_to_deepest() {
    // The heuristic error never reaches 1e-40.
    let accepted = absolute(1e-39, trap(|x: f64| x.sin(), 0.0, PI).unwrap()).unwrap();

    assert_eq!(accepted.evaluations, 1537);
    assert_relative_eq!(accepted.value, 2.0, max_relative = 1e-12);
}

// ============================================================================
// Relative Filter Tests
// ============================================================================

/// A loose relative target accepts at the first comparison instead of
/// refining to the ceiling.
#[test]
fn test_relative_loose_target_accepts_early() {
    let accepted = relative(1e30, trap(|x: f64| x.exp(), 0.0, 1.0).unwrap()).unwrap();

    assert_eq!(accepted.evaluations, 25);
}

/// A tight relative target still returns a correct estimate through the
/// deepest-level fallback.
#[test]
fn test_relative_tight_target_stays_correct() {
    let accepted = relative(1e-6, trap(|x: f64| x.sin(), 0.0, PI).unwrap()).unwrap();

    assert_relative_eq!(accepted.value, 2.0, max_relative = 1e-9);
}

/// Exactly-zero consecutive estimates (odd integrand) accept
/// immediately instead of dividing zero by zero.
#[test]
fn test_relative_accepts_exact_zeros() {
    let accepted = relative(1e-12, trap(|x: f64| x, -1.0, 1.0).unwrap()).unwrap();

    assert_eq!(accepted.value, 0.0);
    assert_eq!(accepted.evaluations, 25);
}

/// A never-satisfied relative target falls back to the deepest level.
#[test]
fn test_relative_falls_back_to_deepest() {
    let accepted = relative(0.0, trap(|x: f64| x.exp(), 0.0, 1.0).unwrap()).unwrap();

    assert_eq!(accepted.evaluations, 1537);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Filters report an empty sequence instead of inventing an estimate.
#[test]
fn test_empty_sequence_errors() {
    let empty: Vec<Estimate> = Vec::new();
    assert_eq!(absolute(1e-6, empty), Err(TanhSinhError::EmptySequence));

    let empty: Vec<Estimate> = Vec::new();
    assert_eq!(relative(1e-6, empty), Err(TanhSinhError::EmptySequence));
}

// ============================================================================
// Confidence Interval Tests
// ============================================================================

/// The confidence interval is centered on the value with width exactly
/// twice the error estimate.
#[test]
fn test_confidence_interval_width() {
    let est = trap(|x: f64| x.sin(), 0.0, PI).unwrap().next().unwrap();
    let (lo, hi) = confidence(&est);

    assert_relative_eq!(hi - lo, 2.0 * est.error_estimate, max_relative = 1e-12);
    assert_relative_eq!((lo + hi) / 2.0, est.value, max_relative = 1e-12);
    assert!(lo <= est.value && est.value <= hi);
}
