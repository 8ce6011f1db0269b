//! Domain-transform combinators.
//!
//! ## Purpose
//!
//! This module maps improper integration ranges onto finite intervals so
//! any finite-interval method can handle them: the non-negative half-line
//! via `x = t / (1 - t)` and the whole real line via `x = tan t`.
//!
//! ## Design notes
//!
//! * **Higher-order**: Each combinator wraps the integrand with the
//!   substitution's Jacobian and hands the wrapped integrand plus the
//!   finite bounds to an arbitrary method closure. The method decides how
//!   to integrate; the combinator only reshapes the problem.
//! * **Endpoint safety**: The substitutions are singular at the finite
//!   endpoints (`t = 1`, `t = ±pi/2`), but quadrature abscissas lie
//!   strictly inside the interval, so the wrapped integrand is never
//!   evaluated at a pole.
//!
//! ## Non-goals
//!
//! * No transform for general `[a, inf)` ranges; shift the integrand
//!   before calling [`non_negative`].

/// Boxed integrand handed to the method closure by the combinators.
pub type Integrand = Box<dyn Fn(f64) -> f64 + Send + Sync>;

// ============================================================================
// Combinators
// ============================================================================

/// Integrate `f` over `[0, inf)` by any finite-interval method.
///
/// Substitutes `x = t / (1 - t)` over `[0, 1]`, with Jacobian
/// `1 / (1 - t)^2`.
pub fn non_negative<F, M, R>(method: M, f: F) -> R
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
    M: FnOnce(Integrand, f64, f64) -> R,
{
    let g = move |t: f64| {
        let u = 1.0 - t;
        f(t / u) / (u * u)
    };
    method(Box::new(g), 0.0, 1.0)
}

/// Integrate `f` over the whole real line by any finite-interval method.
///
/// Substitutes `x = tan t` over `[-pi/2, pi/2]`, with Jacobian
/// `1 + tan^2 t`.
pub fn everywhere<F, M, R>(method: M, f: F) -> R
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
    M: FnOnce(Integrand, f64, f64) -> R,
{
    let g = move |t: f64| {
        let tan_t = t.tan();
        f(tan_t) * (1.0 + tan_t * tan_t)
    };
    method(
        Box::new(g),
        -std::f64::consts::FRAC_PI_2,
        std::f64::consts::FRAC_PI_2,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_reshapes_bounds() {
        let (a, b) = non_negative(|_, a, b| (a, b), |x: f64| x);
        assert_eq!(a, 0.0);
        assert_eq!(b, 1.0);
    }

    #[test]
    fn non_negative_applies_jacobian() {
        // At t = 0.5: x = 1, Jacobian = 4.
        let val = non_negative(|g, _, _| g(0.5), |x: f64| x);
        assert_eq!(val, 4.0);
    }

    #[test]
    fn everywhere_reshapes_bounds() {
        let (a, b) = everywhere(|_, a, b| (a, b), |x: f64| x);
        assert_eq!(a, -std::f64::consts::FRAC_PI_2);
        assert_eq!(b, std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn everywhere_applies_jacobian() {
        // At t = 0: x = 0, Jacobian = 1.
        let val = everywhere(|g, _, _| g(0.0), |x: f64| x + 7.0);
        assert_eq!(val, 7.0);
    }
}
