//! Tests for the adaptive refinement engine.
//!
//! These tests verify the level-by-level tanh-sinh scheme through the
//! public entry points:
//! - Estimate values and error bounds on smooth integrands
//! - The doubling evaluation-count sequence
//! - Endpoint-singular integrands
//! - Laziness of the refinement iterator
//!
//! ## Test Organization
//!
//! 1. **Smooth Integrands** - Regression values on well-behaved functions
//! 2. **Cost Model** - Evaluation counts per level
//! 3. **Singular Integrands** - Endpoint singularities
//! 4. **Laziness** - Work happens only on demand

use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::atomic::{AtomicUsize, Ordering};

use approx::assert_relative_eq;

use tanhsinh::prelude::*;

// ============================================================================
// Smooth Integrand Tests
// ============================================================================

/// A constant integrand is captured almost exactly at the coarsest level.
#[test]
fn test_constant_integrand_level_zero() {
    let first = trap(|_| 3.0, 2.0, 5.0).unwrap().next().unwrap();

    assert_relative_eq!(first.value, 9.0, max_relative = 1e-12);
    assert_eq!(first.evaluations, 13);
    assert!(first.error_estimate >= 0.0);
}

/// Regression: integral of sin over [pi/2, pi] is 1, met at 25
/// evaluations for an absolute target of 1e-6.
#[test]
fn test_sin_quarter_wave_regression() {
    let accepted = absolute(1e-6, trap(|x: f64| x.sin(), FRAC_PI_2, PI).unwrap()).unwrap();

    assert_relative_eq!(accepted.value, 1.0, max_relative = 1e-12);
    assert!(accepted.error_estimate < 1e-9);
    assert_eq!(accepted.evaluations, 25);
}

/// The error estimate shrinks monotonically on a smooth integrand until
/// it bottoms out near machine precision.
#[test]
fn test_error_estimates_shrink() {
    let errors: Vec<f64> = trap(|x: f64| x.sin(), 0.0, PI)
        .unwrap()
        .map(|est| est.error_estimate)
        .collect();

    assert_eq!(errors.len(), 8);
    assert!(errors[1] < errors[0]);
    assert!(errors[2] < errors[1]);
    assert!(errors[2] < 1e-12);
}

/// An integrand odd about the midpoint gives exactly-zero estimates at
/// every level.
#[test]
fn test_odd_integrand_exact_zero() {
    for est in trap(|x: f64| x * x * x, -2.0, 2.0).unwrap() {
        assert_eq!(est.value, 0.0);
    }
}

// ============================================================================
// Cost Model Tests
// ============================================================================

/// Evaluation counts follow the doubling formula 13, 25, 49, ...
#[test]
fn test_evaluation_counts() {
    let counts: Vec<usize> = trap(|x: f64| x.exp(), 0.0, 1.0)
        .unwrap()
        .map(|est| est.evaluations)
        .collect();

    assert_eq!(counts, vec![13, 25, 49, 97, 193, 385, 769, 1537]);
}

// ============================================================================
// Singular Integrand Tests
// ============================================================================

/// An inverse-square-root endpoint singularity converges to the exact
/// integral despite being unbounded at x = 0.
#[test]
fn test_inverse_sqrt_singularity() {
    let accepted = absolute(1e-9, trap(|x: f64| 1.0 / x.sqrt(), 0.0, 1.0).unwrap()).unwrap();

    assert_relative_eq!(accepted.value, 2.0, max_relative = 1e-6);
}

/// Regression from the classic tanh-sinh literature: 1/sqrt(sin x)
/// over [0, 1], singular at the lower endpoint.
#[test]
fn test_inverse_sqrt_sin_singularity() {
    let accepted = absolute(1e-9, trap(|x: f64| 1.0 / x.sin().sqrt(), 0.0, 1.0).unwrap()).unwrap();

    assert_relative_eq!(accepted.value, 2.0348053192, max_relative = 1e-6);
}

// ============================================================================
// Laziness Tests
// ============================================================================

/// Constructing a sequence evaluates nothing; each level pays only its
/// own samples.
#[test]
fn test_sequence_is_lazy() {
    let calls = AtomicUsize::new(0);
    let mut seq = trap(
        |x: f64| {
            calls.fetch_add(1, Ordering::Relaxed);
            x.cos()
        },
        0.0,
        1.0,
    )
    .unwrap();

    assert_eq!(calls.load(Ordering::Relaxed), 0);

    seq.next();
    let after_one = calls.load(Ordering::Relaxed);
    assert_eq!(after_one, 25);

    seq.next();
    assert_eq!(calls.load(Ordering::Relaxed), after_one + 24);
}
