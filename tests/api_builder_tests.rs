//! Tests for the fluent builder API.
//!
//! These tests verify configuration, validation, and the accelerated
//! rule through the public surface:
//! - Builder parameter validation
//! - Interval validation at call time
//! - Simpson acceleration vs plain trapezoid refinement
//! - Level caps and band overrides
//!
//! ## Test Organization
//!
//! 1. **Builder Validation** - Rejected and accepted configurations
//! 2. **Interval Validation** - Bounds checked per call
//! 3. **Rules** - Simpson vs trapezoid
//! 4. **Configuration Effects** - Level caps, band overrides

use approx::assert_relative_eq;

use tanhsinh::prelude::*;

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Out-of-range level caps are rejected with context.
#[test]
fn test_builder_rejects_bad_level_cap() {
    assert_eq!(
        Integrator::new().max_levels(0).build().unwrap_err(),
        TanhSinhError::InvalidMaxLevels { got: 0, max: 8 }
    );
    assert_eq!(
        Integrator::new().max_levels(20).build().unwrap_err(),
        TanhSinhError::InvalidMaxLevels { got: 20, max: 8 }
    );
}

/// Degenerate detection bands are rejected with context.
#[test]
fn test_builder_rejects_bad_band() {
    assert_eq!(
        Integrator::new().quadratic_band(2.01, 1.99).build().unwrap_err(),
        TanhSinhError::InvalidBand { lo: 2.01, hi: 1.99 }
    );
    assert!(matches!(
        Integrator::new().quadratic_band(1.99, f64::NAN).build(),
        Err(TanhSinhError::InvalidBand { .. })
    ));
}

/// The defaults build without complaint.
#[test]
fn test_default_configuration_builds() {
    assert!(Integrator::new().build().is_ok());
    assert!(Integrator::default().build().is_ok());
}

// ============================================================================
// Interval Validation Tests
// ============================================================================

/// Inverted and non-finite intervals are rejected per call.
#[test]
fn test_interval_validation() {
    assert_eq!(
        trap(|x: f64| x, 1.0, 1.0).err(),
        Some(TanhSinhError::IntervalOrder { a: 1.0, b: 1.0 })
    );
    assert!(matches!(
        trap(|x: f64| x, 3.0, -3.0),
        Err(TanhSinhError::IntervalOrder { .. })
    ));
    assert!(matches!(
        simpson(|x: f64| x, 0.0, f64::INFINITY),
        Err(TanhSinhError::NonFiniteBound { bound: "b", .. })
    ));
    assert!(matches!(
        simpson(|x: f64| x, f64::NAN, 1.0),
        Err(TanhSinhError::NonFiniteBound { bound: "a", .. })
    ));
}

/// Errors render with the offending values.
#[test]
fn test_error_display() {
    let err = trap(|x: f64| x, 2.0, 1.0).err().unwrap();
    let text = err.to_string();
    assert!(text.contains("a=2"));
    assert!(text.contains("b=1"));
}

// ============================================================================
// Rule Tests
// ============================================================================

/// Simpson acceleration reaches an absolute target on a smooth even
/// integrand at no more evaluations than plain trapezoid refinement.
#[test]
fn test_simpson_no_slower_than_trap() {
    let target = 1e-8;
    let t = absolute(target, trap(|x: f64| x.cos(), -1.0, 1.0).unwrap()).unwrap();
    let s = absolute(target, simpson(|x: f64| x.cos(), -1.0, 1.0).unwrap()).unwrap();

    assert!(s.evaluations <= t.evaluations);
    assert_relative_eq!(s.value, 2.0 * 1.0_f64.sin(), max_relative = 1e-8);
    assert_relative_eq!(t.value, 2.0 * 1.0_f64.sin(), max_relative = 1e-8);
}

/// Both rules agree on the converged value.
#[test]
fn test_rules_agree_when_converged() {
    let t = trap(|x: f64| x.exp(), 0.0, 1.0).unwrap().last().unwrap();
    let s = simpson(|x: f64| x.exp(), 0.0, 1.0).unwrap().last().unwrap();

    assert_relative_eq!(t.value, s.value, max_relative = 1e-12);
    assert_relative_eq!(t.value, std::f64::consts::E - 1.0, max_relative = 1e-12);
}

// ============================================================================
// Configuration Effect Tests
// ============================================================================

/// The level cap bounds the sequence length.
#[test]
fn test_level_cap_bounds_sequence() {
    let method = Integrator::new().max_levels(3).build().unwrap();
    let seq = method.refinements(|x: f64| x.sin(), 0.0, 1.0).unwrap();

    assert_eq!(seq.count(), 3);
}

/// A collapsed detection band disables delta squaring; the estimate on
/// a smooth integrand becomes more conservative, never smaller.
#[test]
fn test_band_override_is_conservative() {
    let narrow = Integrator::new()
        .quadratic_band(1.999999, 2.000001)
        .build()
        .unwrap();
    let default = Integrator::new().build().unwrap();

    let f = |x: f64| x.sin();
    let pairs = narrow
        .refinements(f, 0.0, 1.0)
        .unwrap()
        .zip(default.refinements(f, 0.0, 1.0).unwrap());
    for (n, d) in pairs {
        assert!(n.error_estimate >= d.error_estimate);
        assert_eq!(n.value, d.value);
    }
}

/// `integrate` honors both tolerance kinds.
#[test]
fn test_integrate_tolerances() {
    let method = Integrator::new().build().unwrap();

    let abs = method
        .integrate(|x: f64| x.sin(), 0.0, 1.0, Tolerance::Absolute(1e-6))
        .unwrap();
    assert_relative_eq!(abs.value, 1.0 - 1.0_f64.cos(), max_relative = 1e-6);

    let rel = method
        .integrate(|x: f64| x.sin(), 0.0, 1.0, Tolerance::Relative(1e-6))
        .unwrap();
    assert_relative_eq!(rel.value, 1.0 - 1.0_f64.cos(), max_relative = 1e-6);
}
