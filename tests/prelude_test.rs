//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types and
//! functions for convenient usage of the quadrature API. The prelude
//! should provide a one-stop import for common functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Types can be used without qualification
//! 3. **Builder Pattern** - Complete workflows work with prelude imports

use tanhsinh::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that the prelude exports the entry points, filters, and
/// error type.
#[test]
fn test_prelude_imports() {
    let seq = trap(|x: f64| x.sin(), 0.0, 1.0);
    assert!(seq.is_ok(), "Basic sequence should work with prelude imports");

    let result: Result<Estimate, TanhSinhError> = absolute(1e-6, seq.unwrap());
    assert!(result.is_ok());
}

/// Test Rule and Tolerance are available.
///
/// Verifies that the rule and tolerance enums are exported.
#[test]
fn test_prelude_rule_and_tolerance() {
    let _ = Integrator::new().rule(Rule::Trapezoid);
    let _ = Integrator::new().rule(Rule::Simpson);
    let _ = Tolerance::Absolute(1e-6);
    let _ = Tolerance::Relative(1e-6);
}

/// Test strategies are available.
///
/// Verifies that the strategy types and trait are exported.
#[test]
fn test_prelude_strategies() {
    let _ = Integrator::new().strategy(Sequential);

    #[cfg(feature = "parallel")]
    let _ = Integrator::new().strategy(Chunked::default());
}

/// Test the heuristic band constant is available.
#[test]
fn test_prelude_band_constant() {
    assert!(QUADRATIC_BAND.0 < QUADRATIC_BAND.1);
    let _ = Integrator::new().quadratic_band(QUADRATIC_BAND.0, QUADRATIC_BAND.1);
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test a complete workflow through the prelude alone.
#[test]
fn test_prelude_full_workflow() {
    let method = Integrator::new()
        .rule(Rule::Simpson)
        .max_levels(6)
        .build()
        .unwrap();

    let est = method
        .integrate(|x: f64| x * x, 0.0, 1.0, Tolerance::Absolute(1e-9))
        .unwrap();

    assert!((est.value - 1.0 / 3.0).abs() < 1e-9);
    let (lo, hi) = confidence(&est);
    assert!(lo <= est.value && est.value <= hi);
}

/// Test transforms are available and compose with entry points.
#[test]
fn test_prelude_transforms() {
    let est = non_negative(
        |g, a, b| absolute(1e-6, trap(g, a, b)?),
        |x: f64| (-x).exp(),
    )
    .unwrap();
    assert!((est.value - 1.0).abs() < 1e-6);

    let est = everywhere(
        |g, a, b| absolute(1e-6, simpson(g, a, b)?),
        |x: f64| 1.0 / (1.0 + x * x),
    )
    .unwrap();
    assert!((est.value - std::f64::consts::PI).abs() < 1e-6);
}
