//! Tests for the domain-transform combinators.
//!
//! These tests verify the improper-range substitutions through the
//! public entry points:
//! - The half-line transform `x = t / (1 - t)`
//! - The whole-line transform `x = tan t`
//! - Composition with filters and the builder API
//!
//! ## Test Organization
//!
//! 1. **Half-Line Transform** - Decaying integrands over [0, inf)
//! 2. **Whole-Line Transform** - Integrands over the real line
//! 3. **Composition** - Transforms over arbitrary methods

use std::f64::consts::PI;

use approx::assert_relative_eq;

use tanhsinh::prelude::*;

// ============================================================================
// Half-Line Transform Tests
// ============================================================================

/// Integral of exp(-x) over [0, inf) is 1.
#[test]
fn test_exponential_decay() {
    let accepted = non_negative(
        |g, a, b| absolute(1e-6, trap(g, a, b)?),
        |x: f64| (-x).exp(),
    )
    .unwrap();

    assert_relative_eq!(accepted.value, 1.0, max_relative = 1e-6);
}

/// Integral of 1 / (1 + x)^2 over [0, inf) is 1.
#[test]
fn test_rational_decay() {
    let accepted = non_negative(
        |g, a, b| absolute(1e-6, trap(g, a, b)?),
        |x: f64| 1.0 / ((1.0 + x) * (1.0 + x)),
    )
    .unwrap();

    assert_relative_eq!(accepted.value, 1.0, max_relative = 1e-6);
}

// ============================================================================
// Whole-Line Transform Tests
// ============================================================================

/// The Gaussian integral over the real line is sqrt(pi).
#[test]
fn test_gaussian_integral() {
    let accepted = everywhere(
        |g, a, b| absolute(1e-9, trap(g, a, b)?),
        |x: f64| (-x * x).exp(),
    )
    .unwrap();

    assert_relative_eq!(accepted.value, PI.sqrt(), max_relative = 1e-9);
}

/// The Cauchy density 1 / (1 + x^2) integrates to pi; its transform is
/// a constant, so the coarsest level is already near-exact.
#[test]
fn test_cauchy_integral() {
    let first = everywhere(
        |g, a, b| trap(g, a, b).map(|mut seq| seq.next()),
        |x: f64| 1.0 / (1.0 + x * x),
    )
    .unwrap()
    .unwrap();

    assert_relative_eq!(first.value, PI, max_relative = 1e-12);
    assert_eq!(first.evaluations, 13);
}

// ============================================================================
// Composition Tests
// ============================================================================

/// Transforms hand the reshaped problem to any method, including the
/// builder-produced ones.
#[test]
fn test_transform_over_builder_method() {
    let method = Integrator::new().rule(Rule::Simpson).build().unwrap();

    let accepted = non_negative(
        move |g, a, b| method.integrate(g, a, b, Tolerance::Absolute(1e-6)),
        |x: f64| x * (-x).exp(),
    )
    .unwrap();

    // Integral of x exp(-x) over [0, inf) is 1.
    assert_relative_eq!(accepted.value, 1.0, max_relative = 1e-6);
}
