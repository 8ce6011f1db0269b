//! # tanhsinh — Double-Exponential Quadrature for Rust
//!
//! Definite integration of real-valued functions by tanh-sinh
//! (double-exponential) quadrature, with adaptive level-by-level
//! refinement, a heuristic error estimate, Richardson-accelerated
//! variants, and pluggable sequential or parallel sample evaluation.
//!
//! ## What is tanh-sinh quadrature?
//!
//! Tanh-sinh quadrature substitutes `x = tanh((pi/2) sinh t)` into the
//! integral, clustering sample points double-exponentially toward the
//! interval endpoints. The trapezoid rule on the transformed axis then
//! converges extremely fast for smooth integrands and remains robust when
//! the integrand is singular at an endpoint, since no sample ever lands
//! exactly there.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use tanhsinh::prelude::*;
//!
//! // Lazy refinement sequence, then stop at an absolute tolerance.
//! let estimate = absolute(1e-6, trap(|x: f64| x.sin(), 0.0, std::f64::consts::PI)?)?;
//!
//! assert!((estimate.value - 2.0).abs() < 1e-6);
//! assert_eq!(estimate.evaluations, 25);
//! # Result::<(), TanhSinhError>::Ok(())
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use tanhsinh::prelude::*;
//!
//! let method = Integrator::new()
//!     .rule(Rule::Simpson)    // Richardson-accelerated refinement
//!     .max_levels(6)          // cap the refinement depth
//!     .build()?;
//!
//! let estimate = method.integrate(
//!     |x: f64| 1.0 / (1.0 + x * x),
//!     0.0,
//!     1.0,
//!     Tolerance::Absolute(1e-9),
//! )?;
//!
//! assert!((estimate.value - std::f64::consts::FRAC_PI_4).abs() < 1e-9);
//! # Result::<(), TanhSinhError>::Ok(())
//! ```
//!
//! ### Improper Ranges
//!
//! ```rust
//! use tanhsinh::prelude::*;
//!
//! // Integrate exp(-x) over [0, inf) through the t/(1-t) substitution.
//! let estimate = non_negative(
//!     |g, a, b| absolute(1e-6, trap(g, a, b)?),
//!     |x: f64| (-x).exp(),
//! )?;
//!
//! assert!((estimate.value - 1.0).abs() < 1e-6);
//! # Result::<(), TanhSinhError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible operations return `Result<_, TanhSinhError>`: an inverted or
//! non-finite interval, an invalid builder parameter, or a filter fed an
//! empty sequence. A NaN or infinite integrand value is *data*, not an
//! error, and propagates through the estimates.
//!
//! The error estimate attached to each level is a convergence heuristic,
//! not a certified bound.
//!
//! ## Cargo Features
//!
//! - `parallel` (default): chunked rayon evaluation ([`prelude::Chunked`],
//!   `par_trap`, `par_simpson`).
//! - `dev`: re-exports internal modules for white-box testing.
//!
//! ## References
//!
//! - Takahasi, H. & Mori, M. (1974). "Double Exponential Formulas for
//!   Numerical Integration"
//! - Bailey, D. H., Jeyabalan, K. & Li, X. S. (2005). "A Comparison of
//!   Three High-Precision Quadrature Schemes"

// Layer 1: Primitives - error types and static tables.
mod primitives;

// Layer 2: Math - refinement rules and domain transforms.
mod math;

// Layer 3: Algorithms - sample-evaluation strategies.
mod algorithms;

// Layer 4: Evaluation - convergence filters.
mod evaluation;

// Layer 5: Engine - the lazy refinement iterator.
mod engine;

// High-level fluent API for tanh-sinh integration.
mod api;

// Standard tanh-sinh prelude.
pub mod prelude {
    #[cfg(feature = "parallel")]
    pub use crate::api::{par_simpson, par_trap, Chunked};
    pub use crate::api::{
        absolute, confidence, everywhere, non_negative, relative, simpson, trap, Estimate,
        EvalStrategy, Integrand, Integrator, Method, Refinements, Rule, Sequential, TanhSinhError,
        Tolerance, QUADRATIC_BAND,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
